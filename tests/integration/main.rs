//! Component tests: the real router served on an ephemeral port, talking to
//! mock cat facts and dog image APIs.

mod test_harness;
