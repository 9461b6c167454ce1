fn main() -> Result<(), Box<dyn std::error::Error>> {
    jamq::runtime::run()
}
