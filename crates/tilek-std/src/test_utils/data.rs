use cubecl::{CubeElement, Runtime, client::ComputeClient, server::Handle};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Row-major strides for a contiguous tensor of the given shape.
pub fn contiguous_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];

    let mut current = 1;
    for (i, dim) in shape.iter().enumerate().rev() {
        strides[i] = current;
        current *= dim;
    }

    strides
}

/// Seeded random f32 data in `[-1, 1]`.
pub fn random_data(seed: u64, len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..len).map(|_| rng.random_range(-1.0..=1.0)).collect()
}

/// Uploads a seeded random f32 tensor, returning its handle and a host copy.
pub fn random_tensor<R: Runtime>(
    client: &ComputeClient<R>,
    seed: u64,
    shape: &[usize],
) -> (Handle, Vec<f32>) {
    let data = random_data(seed, shape.iter().product());
    let handle = client.create(f32::as_bytes(&data));

    (handle, data)
}
