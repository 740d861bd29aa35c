fn main() {
    argoflow::app::cli::run();
}
