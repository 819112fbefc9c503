fn main() {
    pubset::app::cli::run();
}
