/// Masking and sign-extension helpers.
pub mod bits;
