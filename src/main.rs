fn main() {
    noetherian::app::cli::run();
}
