fn main() {
    plugver::app::cli::run();
}
