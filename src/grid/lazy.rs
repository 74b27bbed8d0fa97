use std::borrow::Cow;
use crate::attribute::*;
use crate::filter::{Filter, FilteredAttribute};
use crate::error::{Error, Result};
use super::*;

/// Applies a trained filter on read. Filtered attributes are replaced by
/// their new attribute; each `get` on one of them fetches the old value
/// from the source and transforms it. Nothing is materialized.
pub struct LazilyFilteredInstances<'a, G : DataGrid, F : Filter> {

    src : &'a G,

    filter : F,

    mapping : Vec<FilteredAttribute>,

    class_attrs : Vec<Attribute>
}

impl<'a, G : DataGrid, F : Filter> LazilyFilteredInstances<'a, G, F> {

    pub fn new(src : &'a G, filter : F) -> Result<Self> {
        let mapping = filter.filtered_attributes();
        for m in mapping.iter() {
            src.attribute_spec(&m.old)?;
        }
        let class_attrs = src.class_attributes().into_iter()
            .map(|c| match mapping.iter().find(|m| m.old == c ) {
                Some(m) => m.new.clone(),
                None => c
            })
            .collect();
        Ok(Self { src, filter, mapping, class_attrs })
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    fn by_new(&self, attr : &Attribute) -> Option<&FilteredAttribute> {
        self.mapping.iter().find(|m| &m.new == attr )
    }

    fn by_old(&self, attr : &Attribute) -> Option<&FilteredAttribute> {
        self.mapping.iter().find(|m| &m.old == attr )
    }

}

impl<'a, G : DataGrid, F : Filter> DataGrid for LazilyFilteredInstances<'a, G, F> {

    fn attributes(&self) -> Vec<Attribute> {
        self.src.attributes().into_iter()
            .map(|a| match self.by_old(&a) {
                Some(m) => m.new.clone(),
                None => a
            })
            .collect()
    }

    fn class_attributes(&self) -> Vec<Attribute> {
        self.class_attrs.clone()
    }

    fn attribute_spec(&self, attr : &Attribute) -> Result<AttributeSpec> {
        if let Some(m) = self.by_new(attr) {
            let old = self.src.attribute_spec(&m.old)?;
            return Ok(AttributeSpec::new(old.group, old.position, m.new.clone()));
        }
        if self.by_old(attr).is_some() {
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
        match self.by_new(&spec.attribute) {
            Some(m) => {
                let old_spec = AttributeSpec::new(spec.group, spec.position, m.old.clone());
                let old_val = self.src.get(&old_spec, row)?;
                let new_val = self.filter.transform(&m.old, &m.new, &old_val)?;
                Ok(Cow::Owned(new_val))
            },
            None if self.by_old(&spec.attribute).is_some() => {
                Err(Error::UnknownAttribute(spec.attribute.name().to_string()))
            },
            None => self.src.get(spec, row)
        }
    }

    fn size(&self) -> (usize, usize) {
        self.src.size()
    }

}
