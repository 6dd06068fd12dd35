//! Welcome banner with a rose-to-gold gradient (IXORA).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

const WORDMARK: &str = r"
 ██╗██╗  ██╗ ██████╗ ██████╗  █████╗
 ██║╚██╗██╔╝██╔═══██╗██╔══██╗██╔══██╗
 ██║ ╚███╔╝ ██║   ██║██████╔╝███████║
 ██║ ██╔██╗ ██║   ██║██╔══██╗██╔══██║
 ██║██╔╝ ██╗╚██████╔╝██║  ██║██║  ██║
 ╚═╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝";

/// Dusty rose (#e11d48).
const ROSE: (u8, u8, u8) = (0xe1, 0x1d, 0x48);
/// Champagne gold (#f5c16c).
const GOLD: (u8, u8, u8) = (0xf5, 0xc1, 0x6c);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the wordmark with a vertical gradient, then version and model.
pub fn print_welcome(model: &str) {
    let mut out = stdout();
    let lines: Vec<&str> = WORDMARK.lines().filter(|l| !l.is_empty()).collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(ROSE, GOLD, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: GOLD.0,
        g: GOLD.1,
        b: GOLD.2,
    }));
    let _ = out.execute(Print(format!(
        "v{} · personal stylist · model: {}\r\n",
        env!("CARGO_PKG_VERSION"),
        model
    )));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(ROSE, GOLD, 0.0), ROSE);
        assert_eq!(lerp_rgb(ROSE, GOLD, 1.0), GOLD);
    }
}
