use std::error::Error;

use rainbowqr::{ECLevel, RainbowBuilder, RainbowReader, Version};

fn main() -> Result<(), Box<dyn Error>> {
    let data = b"This is a test of the rainbow QR codec.";

    let rainbow = RainbowBuilder::new(data)
        .version(Version::Normal(4))
        .ec_level(ECLevel::L)
        .verbose(true)
        .build()?;
    let manifest = rainbow.save(".")?;

    let payload = RainbowReader::new().read_payload(&manifest)?;
    println!("{}", String::from_utf8_lossy(&payload));

    Ok(())
}
