fn main() {
    if let Err(err) = qce_lib::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
