use cubecl::{CubeElement, Runtime, client::ComputeClient, prelude::TensorHandleRef};

use tilek_gemm::launch::{Selection, launch_ref};
use tilek_std::test_utils::{
    TestMode, assert_equals_approx, contiguous_strides, current_test_mode, random_data,
    random_tensor,
};

use crate::reference::naive_gemm;

/// Launches the kernel on seeded random inputs and checks it against the
/// naive host implementation.
pub fn test_random<R: Runtime>(
    client: ComputeClient<R>,
    (m, n, k): (usize, usize, usize),
    alpha: f32,
    beta: f32,
    selection: Selection,
    epsilon: f32,
) {
    let (lhs_handle, lhs_data) = random_tensor(&client, 12, &[m, k]);
    let (rhs_handle, rhs_data) = random_tensor(&client, 34, &[k, n]);
    let (out_handle, out_data) = random_tensor(&client, 56, &[m, n]);

    let expected = naive_gemm(&lhs_data, &rhs_data, &out_data, m, n, k, alpha, beta);

    test_launch(
        client,
        (m, n, k),
        Tensors {
            lhs: lhs_handle,
            rhs: rhs_handle,
            out: out_handle,
        },
        alpha,
        beta,
        selection,
        &expected,
        epsilon,
    );
}

/// Launches the kernel on explicit inputs and checks it against an explicit
/// expected output, for hand-checked cases.
#[allow(clippy::too_many_arguments)]
pub fn test_fixed<R: Runtime>(
    client: ComputeClient<R>,
    (m, n, k): (usize, usize, usize),
    lhs_data: &[f32],
    rhs_data: &[f32],
    out_data: &[f32],
    alpha: f32,
    beta: f32,
    selection: Selection,
    expected: &[f32],
) {
    let tensors = Tensors {
        lhs: client.create(f32::as_bytes(lhs_data)),
        rhs: client.create(f32::as_bytes(rhs_data)),
        out: client.create(f32::as_bytes(out_data)),
    };

    test_launch(
        client,
        (m, n, k),
        tensors,
        alpha,
        beta,
        selection,
        expected,
        1e-6,
    );
}

/// Launches the same problem twice from identical inputs and requires
/// bitwise-identical outputs.
pub fn test_deterministic<R: Runtime>(client: ComputeClient<R>, (m, n, k): (usize, usize, usize)) {
    let (lhs_handle, _) = random_tensor(&client, 12, &[m, k]);
    let (rhs_handle, _) = random_tensor(&client, 34, &[k, n]);
    let prior = random_data(56, m * n);

    let out_a = client.create(f32::as_bytes(&prior));
    let out_b = client.create(f32::as_bytes(&prior));

    let lhs_shape = [m, k];
    let rhs_shape = [k, n];
    let out_shape = [m, n];
    let lhs_strides = contiguous_strides(&lhs_shape);
    let rhs_strides = contiguous_strides(&rhs_shape);
    let out_strides = contiguous_strides(&out_shape);

    let lhs = unsafe { TensorHandleRef::<R>::from_raw_parts(&lhs_handle, &lhs_strides, &lhs_shape) };
    let rhs = unsafe { TensorHandleRef::<R>::from_raw_parts(&rhs_handle, &rhs_strides, &rhs_shape) };

    for out_handle in [&out_a, &out_b] {
        let out =
            unsafe { TensorHandleRef::<R>::from_raw_parts(out_handle, &out_strides, &out_shape) };

        if let Err(err) =
            launch_ref::<R, f32>(&client, &lhs, &rhs, &out, 1.5, 0.5, &Selection::default())
        {
            match current_test_mode() {
                TestMode::Skip => return,
                TestMode::Panic => panic!("Test did not run: {}", err),
                TestMode::Print => unreachable!(),
            }
        }
    }

    let first = f32::from_bytes(&client.read_one(out_a)).to_owned();
    let second = f32::from_bytes(&client.read_one(out_b)).to_owned();

    assert_eq!(first, second);
}

struct Tensors {
    lhs: cubecl::server::Handle,
    rhs: cubecl::server::Handle,
    out: cubecl::server::Handle,
}

#[allow(clippy::too_many_arguments)]
fn test_launch<R: Runtime>(
    client: ComputeClient<R>,
    (m, n, k): (usize, usize, usize),
    tensors: Tensors,
    alpha: f32,
    beta: f32,
    selection: Selection,
    expected: &[f32],
    epsilon: f32,
) {
    let lhs_shape = [m, k];
    let rhs_shape = [k, n];
    let out_shape = [m, n];
    let lhs_strides = contiguous_strides(&lhs_shape);
    let rhs_strides = contiguous_strides(&rhs_shape);
    let out_strides = contiguous_strides(&out_shape);

    let lhs =
        unsafe { TensorHandleRef::<R>::from_raw_parts(&tensors.lhs, &lhs_strides, &lhs_shape) };
    let rhs =
        unsafe { TensorHandleRef::<R>::from_raw_parts(&tensors.rhs, &rhs_strides, &rhs_shape) };
    let out =
        unsafe { TensorHandleRef::<R>::from_raw_parts(&tensors.out, &out_strides, &out_shape) };

    match launch_ref::<R, f32>(&client, &lhs, &rhs, &out, alpha, beta, &selection) {
        Ok(_) => {
            if let Err(err) = assert_equals_approx(&client, tensors.out.clone(), expected, epsilon)
            {
                panic!("{}", err);
            }
        }
        Err(err) => match current_test_mode() {
            TestMode::Skip => {}
            TestMode::Panic => panic!("Test did not run: {}", err),
            TestMode::Print => unreachable!(),
        },
    }
}
