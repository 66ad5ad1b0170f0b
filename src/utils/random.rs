use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random string of `length` ASCII letters and digits.
pub fn random_str(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
