//! Known-value regression fixtures.
//!
//! Expected outputs were derived once from the gamma and transform
//! formulas and are pinned here. Any change to table construction,
//! coefficient order or rounding shows up as a failure in this file.
//!
//! Note that black does not map to black under the dichromat modes: the
//! forward table lifts code 0 to linear 130, which survives as bucket 1
//! and encodes back to 20. Likewise legacy grayscale maps white to 185.

use dichroma_core::RasterImage;
use dichroma_sim::{Deficiency, LumaScale, Simulator, Transform};

const WHITE: u32 = 0xffffffff;
const BLACK: u32 = 0xff000000;
const GRAY: u32 = 0xff808080;
const RED: u32 = 0xffff0000;
const GREEN: u32 = 0xff00ff00;
const BLUE: u32 = 0xff0000ff;
const ORANGE: u32 = 0xffff8000;
const TEAL: u32 = 0xff008080;
const YELLOW: u32 = 0xffffff00;
const MAGENTA: u32 = 0xffff00ff;
const CYAN: u32 = 0xff00ffff;

/// (input, expected output) per mode.
const DEUTERANOPIA: &[(u32, u32)] = &[
    (WHITE, 0xfffefefe),
    (BLACK, 0xff141414),
    (GRAY, 0xff808080),
    (RED, 0xff929200),
    (GREEN, 0xffd9d92e),
    (BLUE, 0xff1414fe),
    (ORANGE, 0xffb0b000),
    (TEAL, 0xff6d6d82),
    (YELLOW, 0xfffefe14),
    (MAGENTA, 0xff9292fc),
    (CYAN, 0xffd9d9ff),
];

const PROTANOPIA: &[(u32, u32)] = &[
    (WHITE, 0xfffefefe),
    (BLACK, 0xff141414),
    (GRAY, 0xff808080),
    (RED, 0xff5e5e1c),
    (GREEN, 0xfff1f100),
    (BLUE, 0xff1414fe),
    (ORANGE, 0xff959514),
    (TEAL, 0xff797980),
    (YELLOW, 0xfffefe14),
    (MAGENTA, 0xff5e5eff),
    (CYAN, 0xfff1f1fe),
];

const TRITANOPIA: &[(u32, u32)] = &[
    (WHITE, 0xfffefefe),
    (BLACK, 0xff141414),
    (GRAY, 0xff808080),
    (RED, 0xffff0061),
    (GREEN, 0xff66e4ff),
    (BLUE, 0xff00668a),
    (ORANGE, 0xffff7190),
    (TEAL, 0xff217b97),
    (YELLOW, 0xffffebef),
    (MAGENTA, 0xfff46786),
    (CYAN, 0xff41f4ff),
];

const GRAYSCALE: &[(u32, u32)] = &[
    (WHITE, 0xffb9b9b9),
    (BLACK, 0xff000000),
    (GRAY, 0xff5d5d5d),
    (RED, 0xff5b5b5b),
    (GREEN, 0xff9f9f9f),
    (BLUE, 0xff373737),
    (ORANGE, 0xff767676),
    (TEAL, 0xff535353),
    (YELLOW, 0xffb3b3b3),
    (MAGENTA, 0xff686868),
    (CYAN, 0xffa6a6a6),
];

const GRAYSCALE_FULL: &[(u32, u32)] = &[
    (WHITE, 0xfffefefe),
    (BLACK, 0xff141414),
    (GRAY, 0xff808080),
    (RED, 0xff7d7d7d),
];

fn check(transform: Transform, fixtures: &[(u32, u32)]) {
    for &(input, expected) in fixtures {
        let got = transform.apply(input);
        assert_eq!(
            got, expected,
            "{transform:?}: {input:#010x} -> {got:#010x}, expected {expected:#010x}"
        );
    }
}

#[test]
fn deuteranopia_fixtures() {
    check(Transform::deuteranopia(), DEUTERANOPIA);
}

#[test]
fn protanopia_fixtures() {
    check(Transform::protanopia(), PROTANOPIA);
}

#[test]
fn tritanopia_fixtures() {
    check(Transform::tritanopia(), TRITANOPIA);
}

#[test]
fn grayscale_fixtures() {
    check(Transform::grayscale(), GRAYSCALE);
    check(Transform::Grayscale(LumaScale::Full), GRAYSCALE_FULL);
}

#[test]
fn fixtures_through_simulator() {
    let cases = [
        (Deficiency::Deuteranopia, DEUTERANOPIA),
        (Deficiency::Protanopia, PROTANOPIA),
        (Deficiency::Tritanopia, TRITANOPIA),
        (Deficiency::Grayscale, GRAYSCALE),
    ];
    for (mode, fixtures) in cases {
        let input: Vec<u32> = fixtures.iter().map(|f| f.0).collect();
        let expected: Vec<u32> = fixtures.iter().map(|f| f.1).collect();
        let raster = RasterImage::from_pixels(input.len() as u32, 1, input).unwrap();
        let out = Simulator::with_mode(mode).transform(raster);
        assert_eq!(out.pixels(), &expected[..], "{mode}");
    }
}

#[test]
fn achromatic_inputs_stay_near_themselves() {
    // white and mid gray survive every dichromat model within one code
    for t in [Transform::deuteranopia(), Transform::protanopia(), Transform::tritanopia()] {
        for px in [WHITE, GRAY] {
            let out = t.apply(px);
            let [r, g, b] = dichroma_core::pixel::to_rgb(out);
            let [r0, _, _] = dichroma_core::pixel::to_rgb(px);
            for c in [r, g, b] {
                assert!((c as i32 - r0 as i32).abs() <= 1, "{t:?} {px:#x} -> {out:#x}");
            }
        }
    }
}
