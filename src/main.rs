fn main() {
    if let Err(err) = keyword_cloud::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
