use serde::Serialize;

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint<V> {
    pub label: String,
    pub value: V,
}

/// Ordered `(label, value)` pairs for one grouping dimension.
///
/// Order is meaningful: it is the order the chart draws its axis in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DerivedSeries<V> {
    points: Vec<SeriesPoint<V>>,
}

impl<V> DerivedSeries<V> {
    pub fn points(&self) -> &[SeriesPoint<V>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    /// Value at `label`, if that bucket is present.
    pub fn value_of(&self, label: &str) -> Option<&V> {
        self.points
            .iter()
            .find(|p| p.label == label)
            .map(|p| &p.value)
    }
}

impl<V: Copy> DerivedSeries<V> {
    pub fn values(&self) -> Vec<V> {
        self.points.iter().map(|p| p.value).collect()
    }
}

impl<V, L: Into<String>> FromIterator<(L, V)> for DerivedSeries<V> {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(label, value)| SeriesPoint {
                    label: label.into(),
                    value,
                })
                .collect(),
        }
    }
}
