fn main() {
    if let Err(e) = bulletin::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
