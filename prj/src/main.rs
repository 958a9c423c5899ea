fn main() {
    if let Err(e) = prj::run_cli() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
