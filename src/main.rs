fn main() {
    testsplit::cli::run();
}
