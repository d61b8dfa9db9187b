/// Class label taken verbatim from a directory name.
/// Example: `cirrus`
pub type ClassName = String;
/// Zero-based integer label assigned to a class in discovery order.
/// Example: `0` for the first discovered class directory.
pub type ClassNumber = usize;
/// One-hot label row; width equals the number of classes in the index.
/// Example: `[0.0, 1.0, 0.0, 0.0]` for class-number 1 of 4.
pub type OneHotRow = Vec<f32>;
