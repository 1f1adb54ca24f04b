use anyhow::Result;

fn main() -> Result<()> {
    battstat::start_battstat()
}
