//! Text formatting for [`Float`].
//!
//! Supported formats:
//! - `'e'`, `'E'`: `-d.dddde±dd`
//! - `'f'`: `-ddddd.dddd`, no exponent
//! - `'g'`, `'G'`: `'e'`/`'E'` for large or small exponents, `'f'` otherwise
//! - `'b'`: `-ddddddp±dd`, decimal integer mantissa at the value's precision
//! - `'p'`: `-0x.dddp±dd`, hexadecimal fraction mantissa
//!
//! A precision of `None` selects the fewest decimal digits that identify the
//! value uniquely at its precision.

use std::fmt;

use numerus_digits::Nat;

use crate::decimal::Decimal;
use crate::float::{Float, Form};

/// Most zero digits printed past the exact decimal expansion of a value;
/// larger requested precisions are clamped.
pub const MAX_ZERO_PAD: i64 = 1 << 16;

impl Float {
    /// Formats the value in `format` with `prec` digits.
    ///
    /// For `'e'`, `'E'` and `'f'` the precision counts digits after the
    /// point; for `'g'` and `'G'` it counts significant digits. It is
    /// ignored by `'b'` and `'p'`. Precisions asking for more than
    /// [`MAX_ZERO_PAD`] zeros past the exact expansion are clamped. An
    /// unknown format yields the sign, `%` and the format character.
    #[must_use]
    pub fn to_text(&self, format: char, prec: Option<usize>) -> String {
        let mut buf = String::new();
        if self.neg {
            buf.push('-');
        }
        if self.form == Form::Inf {
            if !self.neg {
                buf.push('+');
            }
            buf.push_str("Inf");
            return buf;
        }
        match format {
            'b' => {
                self.fmt_b(&mut buf);
                return buf;
            }
            'p' => {
                self.fmt_p(&mut buf);
                return buf;
            }
            'e' | 'E' | 'f' | 'g' | 'G' => {}
            _ => {
                buf.push('%');
                buf.push(format);
                return buf;
            }
        }

        let mut d = Decimal::from_float(self);
        let shortest = prec.is_none();
        let len = |d: &Decimal| d.digits.len() as i64;
        let mut prec = match prec {
            None => {
                d.round_shortest(self);
                match format {
                    'e' | 'E' => len(&d) - 1,
                    'f' => (len(&d) - d.exp).max(0),
                    _ => len(&d),
                }
            }
            Some(p) => {
                // Beyond the exact expansion only zeros remain.
                let exact = match format {
                    'e' | 'E' => len(&d) - 1,
                    'f' => len(&d) - d.exp,
                    _ => len(&d),
                };
                let limit = exact.max(0) + MAX_ZERO_PAD;
                let p = i64::try_from(p).map_or(limit, |p| p.min(limit));
                match format {
                    'e' | 'E' => {
                        d.round(1 + p);
                        p
                    }
                    'f' => {
                        d.round(d.exp + p);
                        p
                    }
                    _ => {
                        let p = p.max(1);
                        d.round(p);
                        p
                    }
                }
            }
        };

        match format {
            'e' | 'E' => fmt_e(&mut buf, format, prec, &d),
            'f' => fmt_f(&mut buf, prec, &d),
            _ => {
                let mut eprec = prec;
                if eprec > len(&d) && len(&d) >= d.exp {
                    eprec = len(&d);
                }
                if shortest {
                    eprec = 6;
                }
                let exp = d.exp - 1;
                if exp < -4 || exp >= eprec {
                    prec = prec.min(len(&d));
                    let e = if format == 'g' { 'e' } else { 'E' };
                    fmt_e(&mut buf, e, prec - 1, &d);
                } else {
                    if prec > d.exp {
                        prec = len(&d);
                    }
                    fmt_f(&mut buf, (prec - d.exp).max(0), &d);
                }
            }
        }
        buf
    }

    /// `mantissa "p" exponent` with a decimal integer mantissa of exactly
    /// `prec` bits.
    fn fmt_b(&self, buf: &mut String) {
        if self.form == Form::Zero {
            buf.push('0');
            return;
        }
        let prec = u64::from(self.prec);
        let m = self.mant.shl_bits(prec - self.mant.bit_len());
        buf.push_str(&m.to_str_radix(10));
        buf.push('p');
        let e = i64::from(self.exp) - i64::from(self.prec);
        if e >= 0 {
            buf.push('+');
        }
        buf.push_str(&e.to_string());
    }

    /// `"0x." hex-fraction "p" exponent`.
    fn fmt_p(&self, buf: &mut String) {
        if self.form == Form::Zero {
            buf.push('0');
            return;
        }
        // Pad to whole hex digits.
        let pad = (4 - self.mant.bit_len() % 4) % 4;
        let m: Nat = self.mant.shl_bits(pad);
        buf.push_str("0x.");
        buf.push_str(m.to_str_radix(16).trim_end_matches('0'));
        buf.push('p');
        if self.exp >= 0 {
            buf.push('+');
        }
        buf.push_str(&self.exp.to_string());
    }
}

/// `d.dddd e±dd` with `prec` digits after the point.
fn fmt_e(buf: &mut String, format: char, prec: i64, d: &Decimal) {
    buf.push(char::from(d.digits.first().copied().unwrap_or(b'0')));
    if prec > 0 {
        buf.push('.');
        let end = (prec + 1).min(d.digits.len() as i64).max(1) as usize;
        if end > 1 {
            buf.extend(d.digits[1..end].iter().map(|&c| char::from(c)));
        }
        for _ in end as i64..=prec {
            buf.push('0');
        }
    }
    buf.push(format);
    let exp = if d.digits.is_empty() { 0 } else { d.exp - 1 };
    buf.push(if exp < 0 { '-' } else { '+' });
    let exp = exp.unsigned_abs();
    if exp < 10 {
        buf.push('0');
    }
    buf.push_str(&exp.to_string());
}

/// Integer digits, then `prec` digits after the point.
fn fmt_f(buf: &mut String, prec: i64, d: &Decimal) {
    if d.exp > 0 {
        let m = d.digits.len().min(d.exp as usize);
        buf.extend(d.digits[..m].iter().map(|&c| char::from(c)));
        for _ in m as i64..d.exp {
            buf.push('0');
        }
    } else {
        buf.push('0');
    }
    if prec > 0 {
        buf.push('.');
        for i in 0..prec {
            buf.push(char::from(d.at(d.exp + i)));
        }
    }
}

/// Pads `text` honoring the sign-aware width and fill flags.
fn pad(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if let Some(digits) = text.strip_prefix('-') {
        f.pad_integral(false, "", digits)
    } else if let Some(inf) = text.strip_prefix('+') {
        if f.sign_plus() {
            f.pad_integral(true, "", inf)
        } else {
            f.pad_integral(true, "", text)
        }
    } else {
        f.pad_integral(true, "", text)
    }
}

impl fmt::Display for Float {
    /// Shortest `'g'` form, or `'f'` with the requested precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match f.precision() {
            None => self.to_text('g', None),
            Some(p) => self.to_text('f', Some(p)),
        };
        pad(f, &text)
    }
}

impl fmt::LowerExp for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(f, &self.to_text('e', f.precision()))
    }
}

impl fmt::UpperExp for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad(f, &self.to_text('E', f.precision()))
    }
}

impl fmt::Debug for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Float({} prec={} {:?})", self.to_text('g', None), self.prec, self.mode)
    }
}
