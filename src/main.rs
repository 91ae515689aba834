fn main() {
    webhookup::app::cli::run();
}
