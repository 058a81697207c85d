const TILEK_TEST_MODE_ENV: &str = "TILEK_TEST_MODE";

#[derive(Default)]
pub enum TestMode {
    #[default]
    /// Tests that cannot launch on the current device are marked as `ok`
    Skip,
    /// Tests that cannot launch on the current device are marked as `failed`
    Panic,
    /// Tests are marked as `failed` and all data is shown
    Print,
}

pub fn current_test_mode() -> TestMode {
    let env = std::env::var(TILEK_TEST_MODE_ENV);

    match env {
        Ok(val) => match val.to_lowercase().as_str() {
            "skip" => TestMode::Skip,
            "panic" => TestMode::Panic,
            "print" => TestMode::Print,
            _ => TestMode::default(),
        },
        Err(_) => TestMode::default(),
    }
}
