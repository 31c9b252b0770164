#[cfg(test)]
ultralight::test_harness!();
