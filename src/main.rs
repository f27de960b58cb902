fn main() {
    quickcrh::app::cli::run();
}
