use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use tracing::debug;
use crate::attribute::*;
use crate::group::*;
use crate::error::{Error, Result};
use super::*;

const FLOAT_GROUP : &str = "FLOAT";

const CATEGORICAL_GROUP : &str = "CAT";

const BINARY_GROUP : &str = "BIN";

/// Number of rows printed by the Display implementation unless changed.
pub const DEFAULT_DISPLAY_ROWS : usize = 30;

/// In-memory column store. Attributes live in attribute groups, which hold
/// their values row-major in packed byte buffers: floats and categoricals in
/// 8-byte cells, binaries one bit each. Attributes are declared first; the
/// first call to `extend` allocates rows and freezes the attribute set.
#[derive(Debug, Clone)]
pub struct DenseInstances {

    groups : Vec<AttributeGroup>,

    group_index : HashMap<String, usize>,

    // (group, position) of each attribute, in declaration order.
    order : Vec<(usize, usize)>,

    class_attrs : Vec<Attribute>,

    rows : usize,

    frozen : bool,

    display_rows : usize
}

impl Default for DenseInstances {

    fn default() -> Self {
        Self::new()
    }

}

impl DenseInstances {

    pub fn new() -> Self {
        Self {
            groups : Vec::new(),
            group_index : HashMap::new(),
            order : Vec::new(),
            class_attrs : Vec::new(),
            rows : 0,
            frozen : false,
            display_rows : DEFAULT_DISPLAY_ROWS
        }
    }

    /// Rebuilds instances from groups whose storage is already sized. Used
    /// by the snapshot reader.
    pub(crate) fn from_parts(
        groups : Vec<AttributeGroup>,
        order : Vec<(usize, usize)>,
        class_attrs : Vec<Attribute>,
        rows : usize
    ) -> Result<Self> {
        let mut group_index = HashMap::new();
        for (ix, g) in groups.iter().enumerate() {
            if group_index.insert(g.name().to_string(), ix).is_some() {
                return Err(Error::DuplicateGroup(g.name().to_string()));
            }
            if g.rows() != rows {
                return Err(Error::Format(format!("group '{}' holds {} rows, expected {}", g.name(), g.rows(), rows)));
            }
        }
        let mut seen = HashSet::new();
        for (g, p) in order.iter() {
            let attr = groups.get(*g)
                .and_then(|grp| grp.attributes().get(*p) )
                .ok_or_else(|| Error::Format(format!("no attribute at group {} position {}", g, p)) )?;
            if !seen.insert(attr) {
                return Err(Error::DuplicateAttribute(attr.name().to_string()));
            }
        }
        let declared : usize = groups.iter().map(|g| g.attributes().len() ).sum();
        if declared != order.len() {
            return Err(Error::Format(format!(
                "groups hold {} attributes but the layout orders {}", declared, order.len()
            )));
        }
        let mut inst = Self {
            groups,
            group_index,
            order,
            class_attrs : Vec::new(),
            rows,
            frozen : true,
            display_rows : DEFAULT_DISPLAY_ROWS
        };
        for attr in class_attrs.iter() {
            inst.add_class_attribute(attr)?;
        }
        Ok(inst)
    }

    pub fn set_display_rows(&mut self, n : usize) {
        self.display_rows = n;
    }

    pub fn attribute_groups(&self) -> &[AttributeGroup] {
        &self.groups[..]
    }

    pub fn attribute_group(&self, name : &str) -> Option<&AttributeGroup> {
        self.group_index.get(name).map(|ix| &self.groups[*ix] )
    }

    pub(crate) fn layout(&self) -> &[(usize, usize)] {
        &self.order[..]
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn locate(&self, attr : &Attribute) -> Option<(usize, usize)> {
        self.order.iter()
            .find(|(g, p)| &self.groups[*g].attributes()[*p] == attr )
            .copied()
    }

    fn check_spec(&self, spec : &AttributeSpec) -> Result<()> {
        let found = self.groups.get(spec.group)
            .and_then(|g| g.attributes().get(spec.position) )
            .map(|a| a == &spec.attribute )
            .unwrap_or(false);
        if found {
            Ok(())
        } else {
            Err(Error::UnknownAttribute(spec.attribute.name().to_string()))
        }
    }

    fn default_group(attr : &Attribute) -> (&'static str, usize) {
        match attr.kind() {
            AttributeKind::Float => (FLOAT_GROUP, pack::WORD),
            AttributeKind::Categorical => (CATEGORICAL_GROUP, pack::WORD),
            AttributeKind::Binary => (BINARY_GROUP, 0)
        }
    }

    fn insert_attribute(&mut self, attr : Attribute, group : usize) -> Result<AttributeSpec> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        if self.locate(&attr).is_some() {
            return Err(Error::DuplicateAttribute(attr.name().to_string()));
        }
        let position = self.groups[group].add_attribute(attr.clone())?;
        self.order.push((group, position));
        Ok(AttributeSpec::new(group, position, attr))
    }

    /// Convenience for building small tables: allocates one more row and
    /// fills it from strings given in attribute declaration order.
    pub fn push_row(&mut self, values : &[&str]) -> Result<usize> {
        if values.len() != self.order.len() {
            return Err(Error::InvalidArgument(format!(
                "row has {} values for {} attributes", values.len(), self.order.len()
            )));
        }
        self.extend(1)?;
        let row = self.rows - 1;
        for (ix, v) in values.iter().enumerate() {
            let (g, p) = self.order[ix];
            let spec = AttributeSpec::new(g, p, self.groups[g].attributes()[p].clone());
            self.set_string(&spec, row, v)?;
        }
        Ok(row)
    }

    /// Rearranges rows so that new row `i` holds old row `order[i]`.
    pub(crate) fn reorder_rows(&mut self, order : &[usize]) -> Result<()> {
        if let Some(bad) = order.iter().find(|r| **r >= self.rows ) {
            return Err(Error::RowOutOfBounds { row : *bad, rows : self.rows });
        }
        for g in self.groups.iter_mut() {
            g.reorder_rows(order);
        }
        self.rows = order.len();
        Ok(())
    }

}

impl DataGrid for DenseInstances {

    fn attributes(&self) -> Vec<Attribute> {
        self.order.iter().map(|(g, p)| self.groups[*g].attributes()[*p].clone() ).collect()
    }

    fn class_attributes(&self) -> Vec<Attribute> {
        self.class_attrs.clone()
    }

    fn attribute_spec(&self, attr : &Attribute) -> Result<AttributeSpec> {
        let (g, p) = self.locate(attr).ok_or_else(|| Error::UnknownAttribute(attr.name().to_string()) )?;
        Ok(AttributeSpec::new(g, p, self.groups[g].attributes()[p].clone()))
    }

    fn add_class_attribute(&mut self, attr : &Attribute) -> Result<()> {
        if self.locate(attr).is_none() {
            return Err(Error::UnknownAttribute(attr.name().to_string()));
        }
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
        check_row(row, self.rows)?;
        self.check_spec(spec)?;
        Ok(self.groups[spec.group].get(spec.position, row))
    }

    fn size(&self) -> (usize, usize) {
        (self.order.len(), self.rows)
    }

}

impl UpdatableDataGrid for DenseInstances {

    fn set(&mut self, spec : &AttributeSpec, row : usize, val : &[u8]) -> Result<()> {
        check_row(row, self.rows)?;
        self.check_spec(spec)?;
        self.groups[spec.group].set(spec.position, row, val)
    }

    fn set_string(&mut self, spec : &AttributeSpec, row : usize, value : &str) -> Result<()> {
        check_row(row, self.rows)?;
        self.check_spec(spec)?;
        let group = &mut self.groups[spec.group];
        let bytes = group.attribute_mut(spec.position)
            .ok_or_else(|| Error::UnknownAttribute(spec.attribute.name().to_string()) )?
            .sys_val_from_str(value)?;
        group.set(spec.position, row, &bytes)
    }

    fn add_attribute(&mut self, attr : Attribute) -> Result<AttributeSpec> {
        let (name, width) = Self::default_group(&attr);
        if !self.group_index.contains_key(name) {
            self.create_attribute_group(name, width)?;
        }
        let group = self.group_index[name];
        self.insert_attribute(attr, group)
    }

    fn add_attribute_to_group(&mut self, attr : Attribute, group : &str) -> Result<AttributeSpec> {
        let ix = *self.group_index.get(group).ok_or_else(|| Error::UnknownGroup(group.to_string()) )?;
        self.insert_attribute(attr, ix)
    }

    fn create_attribute_group(&mut self, name : &str, width : usize) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen);
        }
        if self.group_index.contains_key(name) {
            return Err(Error::DuplicateGroup(name.to_string()));
        }
        debug!("Creating attribute group {} (width {})", name, width);
        self.groups.push(AttributeGroup::new(name, width));
        self.group_index.insert(name.to_string(), self.groups.len() - 1);
        Ok(())
    }

    fn extend(&mut self, rows : usize) -> Result<()> {
        let total = self.rows + rows;
        for g in self.groups.iter_mut() {
            g.resize(total);
        }
        if !self.frozen {
            debug!("Freezing {} attributes across {} groups", self.order.len(), self.groups.len());
        }
        self.frozen = true;
        self.rows = total;
        Ok(())
    }

}

impl Display for DenseInstances {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cols, rows) = self.size();
        writeln!(f, "Instances with {} row(s) {} attribute(s)", rows, cols)?;
        writeln!(f, "Attributes:")?;
        for attr in self.attributes() {
            let marker = if self.class_attrs.contains(&attr) { "*" } else { " " };
            writeln!(f, "{}\t{}", marker, attr)?;
        }
        writeln!(f, "Data:")?;
        let shown = rows.min(self.display_rows);
        for row in 0..shown {
            match self.row_string(row) {
                Ok(s) => writeln!(f, "\t{}", s)?,
                Err(e) => writeln!(f, "\t<{}>", e)?
            }
        }
        if rows > shown {
            writeln!(f, "\t...\n{} row(s) undisplayed", rows - shown)?;
        }
        Ok(())
    }

}
