use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ключ слота, в котором хранится список сохранённых сцен
pub const SAVED_SCENES_KEY: &str = "savedScenes";

/// Ключ одноразового слота с индексом сцены, выбранной в библиотеке
pub const LOAD_SCENE_INDEX_KEY: &str = "loadSceneIndex";

/// Максимальное число сохранённых сцен (старые отбрасываются)
pub const MAX_SAVED_SCENES: usize = 50;

/// Цвет новых объектов по умолчанию
pub const DEFAULT_COLOR: &str = "#4da3ff";

/// Тип примитива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Cube,
    Sphere,
    Cylinder,
}

impl ShapeKind {
    /// Все поддерживаемые типы
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cube, ShapeKind::Sphere, ShapeKind::Cylinder];

    /// Каноническое имя (как в JSON)
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Число из JSON: `null`, нечисловые значения и строки-не-числа дают `None`
fn lenient_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn lenient_coordinate<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(lenient_number(&Value::deserialize(d)?).unwrap_or(0.0))
}

fn lenient_scale<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(lenient_number(&Value::deserialize(d)?).unwrap_or_else(default_scale))
}

fn lenient_position<'de, D: Deserializer<'de>>(d: D) -> Result<PositionRecord, D::Error> {
    match Value::deserialize(d)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value).unwrap_or_default()),
        _ => Ok(PositionRecord::default()),
    }
}

fn lenient_shape_type<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

fn lenient_color<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        _ => Ok(default_color()),
    }
}

/// Позиция объекта в записи
///
/// Отсутствующие, `null` и нечисловые координаты читаются как 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionRecord {
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub x: f64,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub y: f64,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub z: f64,
}

/// Сериализованный объект сцены
///
/// Чтение снисходительное: поле неверного типа (например `"scale": null`
/// из старых сохранений) заменяется значением по умолчанию, а не ломает
/// весь список.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRecord {
    /// Имя типа: каноническое или устаревшее (`SphereGeometry` и т.п.)
    #[serde(rename = "type", default, deserialize_with = "lenient_shape_type")]
    pub shape_type: String,
    #[serde(default, deserialize_with = "lenient_position")]
    pub position: PositionRecord,
    /// Равномерный масштаб по всем трём осям
    #[serde(default = "default_scale", deserialize_with = "lenient_scale")]
    pub scale: f64,
    /// Цвет `#rrggbb`
    #[serde(default = "default_color", deserialize_with = "lenient_color")]
    pub color: String,
}

/// Снимок сцены — упорядоченный список записей
pub type Snapshot = Vec<SceneRecord>;

/// Сохранённая сцена
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScene {
    /// Имя (только для отображения, не уникальный ключ)
    pub name: String,
    /// Время сохранения, в JSON — миллисекунды с начала эпохи
    #[serde(rename = "savedAt", with = "chrono::serde::ts_milliseconds")]
    pub saved_at: DateTime<Utc>,
    /// Снимок объектов
    pub data: Snapshot,
}
