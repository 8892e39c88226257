//! Named column of cells

use super::value::Value;

/// How a column is treated by feature encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Every present value is numeric (an all-missing column counts too)
    Numeric,
    /// At least one present value is text
    Categorical,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::Categorical => write!(f, "categorical"),
        }
    }
}

/// A named, ordered sequence of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Numeric unless some present value is text
    pub fn kind(&self) -> ColumnKind {
        if self.values.iter().any(|v| matches!(v, Value::Str(_))) {
            ColumnKind::Categorical
        } else {
            ColumnKind::Numeric
        }
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Median of the numeric cells, `None` when there are none.
    ///
    /// Even-length inputs average the two middle values.
    pub fn median(&self) -> Option<f64> {
        let mut nums: Vec<f64> = self.values.iter().filter_map(Value::as_f64).collect();
        if nums.is_empty() {
            return None;
        }
        nums.sort_by(f64::total_cmp);
        let mid = nums.len() / 2;
        if nums.len() % 2 == 0 {
            Some((nums[mid - 1] + nums[mid]) / 2.0)
        } else {
            Some(nums[mid])
        }
    }

    /// Replace every missing cell with `fill`, returning how many were filled.
    pub fn fill_missing(&mut self, fill: &Value) -> usize {
        let mut filled = 0;
        for v in self.values.iter_mut().filter(|v| v.is_missing()) {
            *v = fill.clone();
            filled += 1;
        }
        filled
    }

    /// Distinct present values rendered as text, sorted byte-lexicographically
    pub fn levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = self
            .values
            .iter()
            .filter(|v| !v.is_missing())
            .map(ToString::to_string)
            .collect();
        levels.sort();
        levels.dedup();
        levels
    }
}
