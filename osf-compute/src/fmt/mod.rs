//! Rendering of terms back to notation strings.
//!
//! Rendering happens in two stages. [`term_to_string`] walks the term and produces a fully
//! explicit string where every atom is spelled out, then [`abbreviate`] rewrites well-known
//! fragments of that string (`亞(0,0)` to `1`, runs of `1+1+...` to a decimal numeral, and so
//! on) according to the active [`RenderOptions`]. Keeping the second stage purely textual
//! matches how abbreviations compose: a substitution inside a subscript falls out for free.

use osf_parser::parser::term::{Atom, Term, LOMEGA, OMEGA};

/// The head glyph of the notation.
pub const HEAD: &str = "亞";

/// Rendering options for terms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether to abbreviate `亞(0,1)` as `ω`.
    pub omega_lower: bool,

    /// Whether to abbreviate `亞(1,0)` as `Ω`.
    pub omega_upper: bool,

    /// Whether to render atoms in subscript form, `亞_s(a)`, instead of the two-argument form
    /// `亞(s,a)`.
    pub subscript: bool,

    /// Whether to brace every subscript, even ones that are unambiguous without braces.
    ///
    /// This option only has an effect when [`subscript`] is set.
    ///
    /// [`subscript`]: RenderOptions::subscript
    pub always_brace: bool,

    /// Whether to drop a zero subscript entirely, rendering `亞(0,a)` as `亞(a)`.
    pub drop_zero_sub: bool,

    /// Whether to produce TeX output (`\textrm{亞}`, `\omega`, `\Omega`, braced subscripts).
    pub tex: bool,
}

impl RenderOptions {
    /// Wraps the given [`RenderOptions`] into a builder for further customization.
    pub fn into_builder(self) -> RenderOptionsBuilder {
        RenderOptionsBuilder(self)
    }
}

/// Helper struct to build a [`RenderOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptionsBuilder(RenderOptions);

impl RenderOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to abbreviate `亞(0,1)` as `ω`.
    pub fn omega_lower(mut self, omega_lower: bool) -> Self {
        self.0.omega_lower = omega_lower;
        self
    }

    /// Sets whether to abbreviate `亞(1,0)` as `Ω`.
    pub fn omega_upper(mut self, omega_upper: bool) -> Self {
        self.0.omega_upper = omega_upper;
        self
    }

    /// Sets whether to render atoms in subscript form.
    pub fn subscript(mut self, subscript: bool) -> Self {
        self.0.subscript = subscript;
        self
    }

    /// Sets whether to brace every subscript.
    pub fn always_brace(mut self, always_brace: bool) -> Self {
        self.0.always_brace = always_brace;
        self
    }

    /// Sets whether to drop zero subscripts.
    pub fn drop_zero_sub(mut self, drop_zero_sub: bool) -> Self {
        self.0.drop_zero_sub = drop_zero_sub;
        self
    }

    /// Sets whether to produce TeX output.
    pub fn tex(mut self, tex: bool) -> Self {
        self.0.tex = tex;
        self
    }

    /// Builds the [`RenderOptions`] struct.
    pub fn build(self) -> RenderOptions {
        self.0
    }
}

/// Renders a term as a fully explicit notation string.
///
/// Abbreviations ([`RenderOptions::omega_lower`] and friends) are not applied here; pass the
/// result through [`abbreviate`] to get the final display string.
pub fn term_to_string(t: &Term, options: RenderOptions) -> String {
    match t {
        Term::Zero => String::from("0"),
        Term::Sum(atoms) => atoms.iter()
            .map(|atom| atom_to_string(atom, options))
            .collect::<Vec<_>>()
            .join("+"),
        Term::Atom(atom) => atom_to_string(atom, options),
    }
}

fn atom_to_string(atom: &Atom, options: RenderOptions) -> String {
    let arg = term_to_string(&atom.arg, options);
    if options.drop_zero_sub && atom.sub == Term::Zero {
        return format!("{}({})", HEAD, arg);
    }

    let sub = term_to_string(&atom.sub, options);
    if options.subscript {
        if braced(&atom.sub, options) {
            format!("{}_{{{}}}({})", HEAD, sub, arg)
        } else {
            format!("{}_{}({})", HEAD, sub, arg)
        }
    } else {
        format!("{}({},{})", HEAD, sub, arg)
    }
}

/// A subscript can omit its braces only when it will read as a single token after
/// abbreviation: a plain numeral, or a term the active options abbreviate to `ω` / `Ω`.
fn braced(sub: &Term, options: RenderOptions) -> bool {
    if options.always_brace || options.tex {
        return true;
    }

    let single_token = sub.as_numeral().is_some()
        || (options.omega_lower && *sub == *OMEGA)
        || (options.omega_upper && *sub == *LOMEGA);
    !single_token
}

/// Rewrites well-known fragments of a rendered string into their abbreviated forms.
pub fn abbreviate(rendered: &str, options: RenderOptions) -> String {
    let mut out = rendered.to_string();
    for pat in ["亞(0)", "亞_{0}(0)", "亞_0(0)", "亞(0,0)"] {
        out = out.replace(pat, "1");
    }
    if options.omega_lower {
        for pat in ["亞(1)", "亞_{0}(1)", "亞_0(1)", "亞(0,1)"] {
            out = out.replace(pat, "ω");
        }
    }
    if options.omega_upper {
        for pat in ["亞_{1}(0)", "亞_1(0)", "亞(1,0)"] {
            out = out.replace(pat, "Ω");
        }
    }
    if options.tex {
        out = out.replace(HEAD, "\\textrm{亞}");
        out = out.replace('ω', "\\omega");
        out = out.replace('Ω', "\\Omega");
    }
    collapse_numerals(out)
}

/// Repeatedly replaces the leftmost run `1+1+...+1` with the decimal count of its `1`s.
fn collapse_numerals(mut out: String) -> String {
    'scan: loop {
        let bytes = out.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            // a run must start at a `1` that is not the tail of a larger numeral
            if bytes[i] == b'1' && (i == 0 || !bytes[i - 1].is_ascii_digit()) {
                let mut end = i + 1;
                let mut count = 1usize;
                while end + 1 < bytes.len()
                    && bytes[end] == b'+'
                    && bytes[end + 1] == b'1'
                    && bytes.get(end + 2).map_or(true, |b| !b.is_ascii_digit())
                {
                    end += 2;
                    count += 1;
                }
                if count >= 2 {
                    out.replace_range(i..end, &count.to_string());
                    continue 'scan;
                }
            }
            i += 1;
        }
        break;
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use osf_parser::parser::parse_term;

    /// Renders and abbreviates in one step, the way the REPL displays results.
    fn render(source: &str, options: RenderOptions) -> String {
        let term = parse_term(source).unwrap();
        abbreviate(&term_to_string(&term, options), options)
    }

    #[test]
    fn explicit_two_argument_form() {
        let options = RenderOptions::default();
        assert_eq!(render("0", options), "0");
        assert_eq!(render("w", options), "亞(0,1)");
        assert_eq!(render("亞(w,0)", options), "亞(亞(0,1),0)");
    }

    #[test]
    fn numerals_collapse() {
        let options = RenderOptions::default();
        assert_eq!(render("3", options), "3");
        assert_eq!(render("w+2", options), "亞(0,1)+2");
        assert_eq!(abbreviate("1+1+1", options), "3");
    }

    #[test]
    fn omega_abbreviations() {
        let options = RenderOptionsBuilder::new()
            .omega_lower(true)
            .omega_upper(true)
            .build();
        assert_eq!(render("w", options), "ω");
        assert_eq!(render("W", options), "Ω");
        assert_eq!(render("W+w+1", options), "Ω+ω+1");
        assert_eq!(render("亞(0,w)", options), "亞(0,ω)");
    }

    #[test]
    fn subscript_form_braces_by_shape() {
        let options = RenderOptionsBuilder::new().subscript(true).build();
        // numeral subscripts read fine without braces
        assert_eq!(render("亞(2,0)", options), "亞_2(0)");
        // anything else keeps them
        assert_eq!(render("亞(w,0)", options), "亞_{亞_0(1)}(0)");

        let omega = options.into_builder().omega_lower(true).build();
        assert_eq!(render("亞(w,0)", omega), "亞_ω(0)");

        let braced = options.into_builder().always_brace(true).build();
        assert_eq!(render("亞(2,0)", braced), "亞_{2}(0)");
    }

    #[test]
    fn zero_subscripts_can_be_dropped() {
        let options = RenderOptionsBuilder::new()
            .drop_zero_sub(true)
            .omega_lower(true)
            .build();
        assert_eq!(render("亞(0,w)", options), "亞(ω)");
        assert_eq!(render("亞(w,0)", options), "亞(ω,0)");
    }

    #[test]
    fn tex_output() {
        let options = RenderOptionsBuilder::new()
            .omega_lower(true)
            .tex(true)
            .build();
        assert_eq!(render("w", options), "\\omega");
        assert_eq!(render("亞(w,w)", options), "\\textrm{亞}(\\omega,\\omega)");

        let subscripted = options.into_builder().subscript(true).build();
        assert_eq!(render("亞(w,0)", subscripted), "\\textrm{亞}_{\\omega}(0)");
    }

    #[test]
    fn rendering_round_trips_through_the_parser() {
        let options = RenderOptions::default();
        for source in ["0", "1", "w+2", "亞(w,0)", "亞(W,亞(0,w))"] {
            let term = parse_term(source).unwrap();
            let rendered = term_to_string(&term, options);
            assert_eq!(parse_term(&rendered).unwrap(), term, "failed for {}", rendered);
        }
    }
}
