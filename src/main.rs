use miette::Result;

/// Main entry point for the building-swap CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    building_swap::run()
}
