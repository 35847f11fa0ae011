use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::Error;

pub const BLACK: u32 = 0;
pub const WHITE: u32 = 1;
pub const TRANSPARENT: u32 = 2;
pub const PIXEL_RADIX: u32 = 3;

pub struct Image {
    layers: Vec<Layer>,
    width: u32,
    height: u32,
}

impl Image {
    pub fn from_digits(digits: &[u32], width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidImageDimension(width, height));
        }

        let layer_digit_count = (width * height) as usize;
        if digits.is_empty() {
            Err(Error::NoImageInFile)
        } else if digits.len() % layer_digit_count != 0 {
            Err(Error::DigitCountNotMatchImageDimension(
                digits.len(),
                width,
                height,
            ))
        } else {
            let layers = digits
                .chunks(layer_digit_count)
                .map(Layer::from_digits)
                .collect::<Result<Vec<_>, Error>>()?;
            Ok(Self {
                layers,
                width,
                height,
            })
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Product of 1 and 2 digit counts in the layer with fewest 0 digits.
    pub fn checksum(&self) -> u32 {
        self.layers
            .iter()
            .min_by_key(|l| l.digit_count(BLACK))
            .map(|l| l.digit_count(WHITE) * l.digit_count(TRANSPARENT))
            .unwrap_or(0)
    }

    /// Stacks layers from the first one, where a transparent pixel shows the layer below it.
    pub fn merge(&self) -> Vec<u32> {
        let mut pixels = vec![TRANSPARENT; (self.width * self.height) as usize];
        for layer in &self.layers {
            for (p, &d) in pixels.iter_mut().zip(layer.pixels.iter()) {
                if *p == TRANSPARENT {
                    *p = d;
                }
            }
        }

        pixels
    }

    pub fn render(&self) -> String {
        self.merge()
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|&p| if p == WHITE { '#' } else { '.' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct Layer {
    pixels: Vec<u32>,
    digit_counts: [u32; PIXEL_RADIX as usize],
}

impl Layer {
    fn from_digits(digits: &[u32]) -> Result<Self, Error> {
        let mut digit_counts = [0u32; PIXEL_RADIX as usize];
        for &d in digits {
            match digit_counts.get_mut(d as usize) {
                Some(count) => *count += 1,
                None => return Err(Error::PixelValueExceedLimit(d, PIXEL_RADIX)),
            }
        }

        Ok(Self {
            pixels: Vec::from(digits),
            digit_counts,
        })
    }

    pub fn digit_count(&self, d: u32) -> u32 {
        self.digit_counts.get(d as usize).copied().unwrap_or(0)
    }
}

pub fn parse_digits(s: &str) -> Result<Vec<u32>, Error> {
    s.trim()
        .chars()
        .map(|c| {
            c.to_digit(PIXEL_RADIX)
                .ok_or(Error::InvalidCharAsPixel(c, PIXEL_RADIX))
        })
        .collect()
}

pub fn read_image<P>(path: P, width: u32, height: u32) -> Result<Image, Error>
where
    P: AsRef<Path>,
{
    let file = File::open(path).map_err(Error::IOError)?;
    let reader = BufReader::new(file);
    reader.lines().next().map_or(Err(Error::NoImageInFile), |lr| {
        lr.map_err(Error::IOError).and_then(|l| {
            let digits = parse_digits(&l)?;
            Image::from_digits(&digits, width, height)
        })
    })
}

#[test]
fn test_checksum() {
    let digits = parse_digits("012210111220001121").unwrap();
    let image = Image::from_digits(&digits, 3, 2).unwrap();
    assert_eq!(image.layers().len(), 3);
    assert_eq!(image.layers()[1].digit_count(BLACK), 1);
    assert_eq!(image.checksum(), 6);
}

#[test]
fn test_merge_and_render() {
    let digits = parse_digits("0222112222120000").unwrap();
    let image = Image::from_digits(&digits, 2, 2).unwrap();
    assert_eq!(image.merge(), vec![0, 1, 1, 0]);
    assert_eq!(image.render(), ".#\n#.");

    let digits = parse_digits("012210111220001121").unwrap();
    let image = Image::from_digits(&digits, 3, 2).unwrap();
    assert_eq!(image.render(), ".##\n##.");
}

#[test]
fn test_invalid_image() {
    assert!(matches!(
        parse_digits("0123"),
        Err(Error::InvalidCharAsPixel('3', 3))
    ));
    assert!(matches!(
        Image::from_digits(&[0, 1, 2, 0, 1], 2, 2),
        Err(Error::DigitCountNotMatchImageDimension(5, 2, 2))
    ));
    assert!(matches!(
        Image::from_digits(&[0, 1, 5, 0], 2, 2),
        Err(Error::PixelValueExceedLimit(5, 3))
    ));
    assert!(matches!(
        Image::from_digits(&[0, 1], 0, 2),
        Err(Error::InvalidImageDimension(0, 2))
    ));
    assert!(matches!(
        Image::from_digits(&[], 2, 2),
        Err(Error::NoImageInFile)
    ));
}
