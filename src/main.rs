use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    bibsort::cli::run(std::env::args().skip(1))
}
