fn main() {
    if let Err(e) = hosts::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
