//! Template expansion.
//!
//! The `# Generic` payload is instantiated once per `VTYPES` entry. Each
//! instantiation replaces every placeholder token literally, in the order
//! `<RTYPE>`, `<VTYPE>`, `<ITYPE>`.

use log::{debug, warn};

use crate::control::Control;
use crate::error::{GenError, Result};

pub const RTYPE_TOKEN: &str = "<RTYPE>";
pub const VTYPE_TOKEN: &str = "<VTYPE>";
pub const ITYPE_TOKEN: &str = "<ITYPE>";

/// Substitution values for one instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings<'a> {
    /// `None` leaves `<RTYPE>` in place
    pub rtype: Option<&'a str>,
    pub vtype: &'a str,
    pub itype: &'a str,
}

impl<'a> Bindings<'a> {
    /// Resolve the bindings for instantiation `index`.
    pub fn for_index(control: &'a Control, index: usize) -> Result<Self> {
        let vtypes = control.vtypes()?;
        let vtype = vtypes.get(index).ok_or_else(|| GenError::Expand {
            message: format!(
                "instantiation index {} is out of range for {} VTYPES entries",
                index,
                vtypes.len()
            ),
        })?;
        let rtype = control
            .aligned_rtypes()?
            .and_then(|rtypes| rtypes.get(index))
            .map(String::as_str);

        Ok(Self {
            rtype,
            vtype: vtype.as_str(),
            itype: control.itype(),
        })
    }

    /// Apply the bindings to `template`.
    pub fn apply(&self, template: &str) -> String {
        let text = match self.rtype {
            Some(rtype) => template.replace(RTYPE_TOKEN, rtype),
            None => template.to_string(),
        };
        text.replace(VTYPE_TOKEN, self.vtype)
            .replace(ITYPE_TOKEN, self.itype)
    }
}

/// Produce the instantiation of `template` for `VTYPES[index]`.
pub fn instantiate(template: &str, control: &Control, index: usize) -> Result<String> {
    let bindings = Bindings::for_index(control, index)?;
    debug!("Instantiating #{} with VTYPE {}", index, bindings.vtype);
    Ok(bindings.apply(template))
}

/// Produce every instantiation of `template`, in `VTYPES` order.
pub fn expand(template: &str, control: &Control) -> Result<Vec<String>> {
    let count = control.vtypes()?.len();

    if control.rtypes_mismatched() {
        warn!(
            "RTYPES has {} entries but VTYPES has {}; {} is left unsubstituted",
            control.rtypes.as_ref().map_or(0, Vec::len),
            count,
            RTYPE_TOKEN
        );
    }

    (0..count)
        .map(|index| instantiate(template, control, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn control(json: &str) -> Control {
        Control::parse(json).unwrap()
    }

    #[test]
    fn test_expand_vtypes_in_order() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["f32", "f64"]}"#);

        let rows = expand("v:<VTYPE> i:<ITYPE>\n", &control).unwrap();

        assert_eq!(rows, vec!["v:f32 i:i32\n", "v:f64 i:i32\n"]);
    }

    #[test]
    fn test_expand_with_rtypes() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["f32", "f64"], "RTYPES": ["R1", "R2"]}"#);

        let rows = expand("<RTYPE>-<VTYPE>\n", &control).unwrap();

        assert_eq!(rows, vec!["R1-f32\n", "R2-f64\n"]);
    }

    #[test]
    fn test_expand_mismatched_rtypes_left_literal() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["f32", "f64"], "RTYPES": ["R1"]}"#);

        let rows = expand("<RTYPE>-<VTYPE>\n", &control).unwrap();

        assert_eq!(rows, vec!["<RTYPE>-f32\n", "<RTYPE>-f64\n"]);
    }

    #[test]
    fn test_expand_without_rtypes_left_literal() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["u8"]}"#);

        let rows = expand("<RTYPE>", &control).unwrap();

        assert_eq!(rows, vec!["<RTYPE>"]);
    }

    #[test]
    fn test_expand_replaces_every_occurrence() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["u16"], "ITYPE": "isize"}"#);

        let rows = expand("<VTYPE> <VTYPE> <VTYPE> [<ITYPE>; <ITYPE>]", &control).unwrap();

        assert_eq!(rows, vec!["u16 u16 u16 [isize; isize]"]);
    }

    #[test]
    fn test_expand_empty_vtypes() {
        let control = control(r#"{"OUT": "o", "VTYPES": []}"#);

        let rows = expand("<VTYPE>", &control).unwrap();

        assert!(rows.is_empty());
    }

    #[test]
    fn test_expand_missing_vtypes() {
        let control = control(r#"{"OUT": "o"}"#);

        let result = expand("<VTYPE>", &control);

        assert!(matches!(
            result,
            Err(GenError::ConfigField { field: "VTYPES", .. })
        ));
    }

    #[test]
    fn test_instantiate_out_of_range() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["f32"]}"#);

        let result = instantiate("<VTYPE>", &control, 1);

        assert!(matches!(result, Err(GenError::Expand { .. })));
    }

    #[test]
    fn test_replacement_is_literal() {
        let bindings = Bindings {
            rtype: Some("$&"),
            vtype: "$1",
            itype: "i32",
        };

        assert_eq!(bindings.apply("<RTYPE> <VTYPE>"), "$& $1");
    }

    #[test]
    fn test_template_without_tokens_is_repeated() {
        let control = control(r#"{"OUT": "o", "VTYPES": ["a", "b", "c"]}"#);

        let rows = expand("fixed\n", &control).unwrap();

        assert_eq!(rows, vec!["fixed\n"; 3]);
    }
}
