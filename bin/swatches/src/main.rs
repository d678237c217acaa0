//! This program prints one palette per harmony rule as truecolor terminal
//! swatches, anchored on a fixed seed color.

use huegen::{contrast_color, format, Color, HarmonyType, Notation, PaletteGenerator};

const COUNT: usize = 6;

fn main() -> huegen::Result<()> {
    // chocolate
    let seed = Color::from_hex("#D2691E")?;
    let mut generator = PaletteGenerator::new();

    for harmony in HarmonyType::ALL {
        let palette = generator.generate(harmony, COUNT, Some(&seed))?;

        print!("{harmony:>13}  ");
        for color in &palette {
            let ink = if contrast_color(&color.hex)? == "#000000" {
                "0;0;0"
            } else {
                "255;255;255"
            };
            print!(
                "\x1b[48;2;{};{};{}m\x1b[38;2;{ink}m{:^17}\x1b[0m",
                color.rgb.r,
                color.rgb.g,
                color.rgb.b,
                format(color, Notation::Hex),
            );
        }
        println!();

        print!("{:>13}  ", "");
        for color in &palette {
            print!("{:^17}", format(color, Notation::Hsl));
        }
        println!();
    }

    Ok(())
}
