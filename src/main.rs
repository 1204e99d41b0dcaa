#[tokio::main]
async fn main() {
    if let Err(err) = concurso_advisor::cli::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
