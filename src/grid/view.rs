use std::borrow::Cow;
use crate::attribute::*;
use crate::error::{Error, Result};
use super::*;

/// Read-only projection over another grid. Rows can be remapped (and
/// repeated, which sampling with replacement relies on) and attributes can
/// be hidden. Class attributes are tracked per view, so flagging a class
/// attribute here leaves the source untouched.
#[derive(Debug, Clone)]
pub struct InstancesView<'a, G : DataGrid> {

    src : &'a G,

    // View row -> source row. None exposes every source row as is.
    rows : Option<Vec<usize>>,

    // Visible attributes. None exposes every source attribute.
    attrs : Option<Vec<Attribute>>,

    class_attrs : Vec<Attribute>
}

impl<'a, G : DataGrid> InstancesView<'a, G> {

    fn build(src : &'a G, rows : Option<Vec<usize>>, attrs : Option<Vec<Attribute>>) -> Result<Self> {
        if let Some(rows) = &rows {
            let n = src.rows();
            for r in rows.iter() {
                check_row(*r, n)?;
            }
        }
        if let Some(attrs) = &attrs {
            for a in attrs.iter() {
                src.attribute_spec(a)?;
            }
        }
        let class_attrs = src.class_attributes().into_iter()
            .filter(|c| attrs.as_ref().map(|a| a.contains(c) ).unwrap_or(true) )
            .collect();
        Ok(Self { src, rows, attrs, class_attrs })
    }

    /// Exposes source row `rows[i]` as view row `i`.
    pub fn from_rows(src : &'a G, rows : Vec<usize>) -> Result<Self> {
        Self::build(src, Some(rows), None)
    }

    /// Exposes every row but only the informed attributes.
    pub fn from_attributes(src : &'a G, attrs : Vec<Attribute>) -> Result<Self> {
        Self::build(src, None, Some(attrs))
    }

    pub fn from_visible(src : &'a G, rows : Vec<usize>, attrs : Vec<Attribute>) -> Result<Self> {
        Self::build(src, Some(rows), Some(attrs))
    }

    pub fn source(&self) -> &'a G {
        self.src
    }

    /// Source row backing the informed view row.
    pub fn source_row(&self, row : usize) -> Result<usize> {
        match &self.rows {
            Some(rows) => rows.get(row).copied().ok_or(Error::RowOutOfBounds { row, rows : rows.len() }),
            None => {
                check_row(row, self.src.rows())?;
                Ok(row)
            }
        }
    }

    fn visible(&self, attr : &Attribute) -> bool {
        self.attrs.as_ref().map(|a| a.contains(attr) ).unwrap_or(true)
    }

}

impl<'a, G : DataGrid> DataGrid for InstancesView<'a, G> {

    fn attributes(&self) -> Vec<Attribute> {
        match &self.attrs {
            Some(attrs) => attrs.iter()
                .filter_map(|a| self.src.attribute_spec(a).ok().map(|s| s.attribute ) )
                .collect(),
            None => self.src.attributes()
        }
    }

    fn class_attributes(&self) -> Vec<Attribute> {
        self.class_attrs.clone()
    }

    fn attribute_spec(&self, attr : &Attribute) -> Result<AttributeSpec> {
        if !self.visible(attr) {
            return Err(Error::UnknownAttribute(attr.name().to_string()));
        }
        self.src.attribute_spec(attr)
    }

    fn add_class_attribute(&mut self, attr : &Attribute) -> Result<()> {
        self.attribute_spec(attr)?;
        if !self.class_attrs.contains(attr) {
            self.class_attrs.push(attr.clone());
        }
        Ok(())
    }

    fn remove_class_attribute(&mut self, attr : &Attribute) -> Result<()> {
        match self.class_attrs.iter().position(|a| a == attr ) {
            Some(ix) => {
                self.class_attrs.remove(ix);
                Ok(())
            },
            None => Err(Error::UnknownAttribute(attr.name().to_string()))
        }
    }

    fn get(&self, spec : &AttributeSpec, row : usize) -> Result<Cow<'_, [u8]>> {
        if !self.visible(&spec.attribute) {
            return Err(Error::UnknownAttribute(spec.attribute.name().to_string()));
        }
        let src_row = self.source_row(row)?;
        self.src.get(spec, src_row)
    }

    fn size(&self) -> (usize, usize) {
        let cols = match &self.attrs {
            Some(attrs) => attrs.len(),
            None => self.src.size().0
        };
        let rows = match &self.rows {
            Some(rows) => rows.len(),
            None => self.src.rows()
        };
        (cols, rows)
    }

}
