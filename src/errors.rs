// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
use error_chain::*;

error_chain! {

    errors {
        // Either grid dimension is zero or negative, or the cell count overflows `usize`.
        InvalidDimension(rows: isize, columns: isize) {
            description("invalid maze dimension")
            display("invalid maze dimension {} x {}: rows and columns must both be at least 1 \
                     and their product must fit in a usize",
                    rows, columns)
        }

        // A random source produced a draw outside of `[0, 1)`.
        // Such draws are rejected, never clamped.
        RandomSourceError(value: f64) {
            description("random source produced a value outside [0, 1)")
            display("random source produced {}, expected a value in [0, 1)", value)
        }
    }
}
