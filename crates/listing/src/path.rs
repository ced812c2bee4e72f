//! Точечные пути к полям записи: `"guest.first_name"`, `"photos.0.url"`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ListError;

/// Проверенный путь к (возможно вложенному) полю записи
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(String);

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self, ListError> {
        let invalid = |reason| ListError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        if path.trim().is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.split('.').any(|segment| segment.trim().is_empty()) {
            return Err(invalid("path contains an empty segment"));
        }

        Ok(Self(path.to_string()))
    }

    /// Разобрать список путей; первая ошибка прерывает разбор
    pub fn parse_all<S: AsRef<str>>(paths: &[S]) -> Result<Vec<Self>, ListError> {
        paths.iter().map(|p| Self::parse(p.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Значение поля в записи или `None`, если поле отсутствует
    pub fn resolve<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        resolve(value, self)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldPath {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = ListError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = ListError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.0
    }
}

/// Спуститься по пути внутрь записи.
///
/// Отсутствующий промежуточный узел, скаляр в середине пути и `null` в конце
/// дают `None`. Числовой сегмент индексирует массив.
pub fn resolve<'a>(value: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.segments() {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    match current {
        Value::Null => None,
        other => Some(other),
    }
}
