use serde::Serialize;
use serde_json::Value;

use crate::error::ListError;
use crate::path::FieldPath;

/// Запись списка: всё, у чего можно прочитать поле по точечному пути.
pub trait Record {
    /// JSON-представление записи, по которому разрешаются пути
    fn fields(&self) -> &Value;

    fn field(&self, path: &FieldPath) -> Option<&Value> {
        path.resolve(self.fields())
    }
}

impl Record for Value {
    fn fields(&self) -> &Value {
        self
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> &Value {
        (**self).fields()
    }
}

/// Типизированная сущность вместе с её JSON-представлением для поиска и сортировки
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    entity: T,
    fields: Value,
}

impl<T: Serialize> Row<T> {
    pub fn new(entity: T) -> Result<Self, ListError> {
        let fields = serde_json::to_value(&entity)?;
        Ok(Self { entity, fields })
    }
}

impl<T> Row<T> {
    pub fn entity(&self) -> &T {
        &self.entity
    }

    pub fn into_entity(self) -> T {
        self.entity
    }
}

impl<T> Record for Row<T> {
    fn fields(&self) -> &Value {
        &self.fields
    }
}

/// Обернуть сущности в [`Row`]
pub fn into_rows<T, I>(entities: I) -> Result<Vec<Row<T>>, ListError>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    entities.into_iter().map(Row::new).collect()
}
