use ledgerbook::{cli::run_demo, init};

fn main() {
    init();

    if let Err(err) = run_demo() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
