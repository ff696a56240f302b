use smallvec::SmallVec;

/// Units recognised directly after a numeric run, longest first.
const UNITS: [&str; 13] = [
    "vmin", "vmax", "turn", "rem", "deg", "rad", "px", "em", "vw", "vh", "ms", "%", "s",
];

/// One numeric run inside a string value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct NumericSlot {
    /// Byte offset where the number starts.
    pub(crate) start: usize,
    /// Byte offset just past the number (before any unit).
    pub(crate) end: usize,
    /// Parsed value.
    pub(crate) value: f64,
    /// Unit suffix, empty when there is none.
    pub(crate) unit: &'static str,
}

/// A string split into literal text and numeric runs (`-?\d*\.?\d+` plus optional unit).
#[derive(Clone, Debug)]
pub(crate) struct NumericTemplate<'a> {
    src: &'a str,
    pub(crate) slots: SmallVec<[NumericSlot; 8]>,
}

impl<'a> NumericTemplate<'a> {
    pub(crate) fn scan(src: &'a str) -> Self {
        let bytes = src.as_bytes();
        let mut slots = SmallVec::new();
        let mut i = 0usize;

        while i < bytes.len() {
            let Some(end) = match_number(bytes, i) else {
                i += 1;
                continue;
            };

            let text = &src[i..end];
            let value = parse_run(text);
            let unit = UNITS
                .iter()
                .copied()
                .find(|u| src[end..].starts_with(u))
                .unwrap_or("");

            slots.push(NumericSlot {
                start: i,
                end,
                value,
                unit,
            });
            i = end + unit.len();
        }

        Self { src, slots }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Rebuild the source with each numeric run replaced by `values[k]`.
    ///
    /// Literal text and unit suffixes are kept from the source.
    pub(crate) fn render(&self, values: &[f64]) -> String {
        let mut out = String::with_capacity(self.src.len() + 8);
        let mut last = 0usize;
        for (slot, v) in self.slots.iter().zip(values) {
            out.push_str(&self.src[last..slot.start]);
            out.push_str(&format_number(*v));
            out.push_str(slot.unit);
            last = slot.end + slot.unit.len();
        }
        out.push_str(&self.src[last..]);
        out
    }
}

/// Match `-?\d*\.?\d+` starting at `i`, returning the end offset.
fn match_number(bytes: &[u8], i: usize) -> Option<usize> {
    let digits_from = |mut j: usize| {
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut j = i;
    if bytes.get(j) == Some(&b'-') {
        j += 1;
    }
    let int_end = digits_from(j);
    if bytes.get(int_end) == Some(&b'.') && bytes.get(int_end + 1).is_some_and(u8::is_ascii_digit) {
        return Some(digits_from(int_end + 1));
    }
    (int_end > j).then_some(int_end)
}

fn parse_run(text: &str) -> f64 {
    let (neg, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let v = if digits.starts_with('.') {
        format!("0{digits}").parse::<f64>()
    } else {
        digits.parse::<f64>()
    }
    .unwrap_or(0.0);
    if neg { -v } else { v }
}

/// Shortest round-trip rendering; `-0` prints as `0`.
pub(crate) fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_owned();
    }
    format!("{v}")
}

#[cfg(test)]
#[path = "../../tests/unit/animation/template.rs"]
mod tests;
