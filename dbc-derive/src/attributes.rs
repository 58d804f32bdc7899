//! Attribute parsing utilities

use syn::{Attribute, ExprLit, Field, Lit};

/// Read a `#[name = "value"]` attribute.
///
/// Returns `Ok(None)` when the attribute is absent and an error spanned on the
/// attribute when it is present but not a string literal.
fn extract_str_attribute(attrs: &[Attribute], name: &str) -> syn::Result<Option<String>> {
    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        let meta = attr.meta.require_name_value()?;
        if let syn::Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) = &meta.value
        {
            return Ok(Some(s.value()));
        }
        return Err(syn::Error::new_spanned(
            &meta.value,
            format!("expected #[{name} = \"...\"]"),
        ));
    }
    Ok(None)
}

/// Extract table name from struct attributes
pub fn extract_table_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    extract_str_attribute(attrs, "table_name")
}

/// Extract column name from field attributes
pub fn extract_column_name(field: &Field) -> syn::Result<Option<String>> {
    extract_str_attribute(&field.attrs, "column_name")
}
