//! Scalar text rendering, shared across ring kinds.
//!
//! Every ring in the engine prints its coefficients through the same three
//! style flags, so a polynomial printer can splice scalars into monomials
//! without knowing the ring: a unit coefficient can be suppressed, a
//! leading '+' forced when the scalar joins a sum, and composite
//! renderings parenthesized when the scalar multiplies something.

use std::fmt::{self, Write};

use crate::complex::Complex;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrintStyle {
    /// Omit a coefficient equal to plus or minus one (keeping its sign).
    pub suppress_one: bool,
    /// Prefix '+' when the rendering would not begin with '-'.
    pub force_plus: bool,
    /// Wrap sum-shaped renderings in parentheses.
    pub parens: bool,
}

/// The shared append-formatted-number primitive. Integral values keep one
/// decimal digit so reals never print like machine integers.
pub fn append_f64(out: &mut String, x: f64) -> fmt::Result {
    if x.fract() == 0.0 {
        write!(out, "{:.1}", x)
    } else {
        write!(out, "{}", x)
    }
}

/// Render a real scalar honoring the style flags.
pub fn append_real(out: &mut String, x: f64, style: PrintStyle) -> fmt::Result {
    if style.suppress_one {
        if x == 1.0 {
            if style.force_plus {
                out.push('+');
            }
            return Ok(());
        }
        if x == -1.0 {
            out.push('-');
            return Ok(());
        }
    }
    let mut body = String::new();
    append_f64(&mut body, x)?;
    if style.force_plus && !body.starts_with('-') {
        out.push('+');
    }
    out.push_str(&body);
    Ok(())
}

/// Render a complex scalar honoring the style flags. The imaginary unit
/// prints as `ii`.
pub fn append_complex(out: &mut String, z: &Complex, style: PrintStyle) -> fmt::Result {
    if z.im == 0.0 {
        // Atomic rendering, parens never apply.
        return append_real(out, z.re, PrintStyle { parens: false, ..style });
    }

    let mut body = String::new();
    if z.re == 0.0 {
        append_imaginary(&mut body, z.im)?;
    } else {
        append_f64(&mut body, z.re)?;
        let mut im_part = String::new();
        append_imaginary(&mut im_part, z.im)?;
        if !im_part.starts_with('-') {
            body.push('+');
        }
        body.push_str(&im_part);
        if style.parens {
            body = format!("({})", body);
        }
    }

    if style.force_plus && !body.starts_with('-') {
        out.push('+');
    }
    out.push_str(&body);
    Ok(())
}

fn append_imaginary(out: &mut String, im: f64) -> fmt::Result {
    if im == 1.0 {
        out.push_str("ii");
    } else if im == -1.0 {
        out.push_str("-ii");
    } else {
        append_f64(out, im)?;
        out.push_str("*ii");
    }
    Ok(())
}
