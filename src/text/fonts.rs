use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use usvg::fontdb;

use crate::foundation::error::{ArtError, ArtResult};

/// Semantic text role; decides family preference and weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FontRole {
    Title,
    Subtitle,
    Body,
}

impl FontRole {
    pub fn preferred_family(self) -> &'static str {
        "Segoe UI"
    }

    pub fn weight(self) -> u16 {
        match self {
            Self::Title => 700,
            Self::Subtitle | Self::Body => 400,
        }
    }
}

/// Sans families commonly shipped on Linux and macOS, tried after the generic sans-serif.
const FALLBACK_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Helvetica",
    "Arial",
];

/// A resolved face at a concrete pixel size.
#[derive(Clone)]
pub struct Font {
    pub role: FontRole,
    pub size_px: f32,
    pub weight: u16,
    /// Family name reported by the face.
    pub family: String,
    /// True when the role's preferred family was not installed.
    pub fallback: bool,
    pub(crate) face: Arc<FaceData>,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("role", &self.role)
            .field("size_px", &self.size_px)
            .field("weight", &self.weight)
            .field("family", &self.family)
            .field("fallback", &self.fallback)
            .field("face_key", &self.face.key)
            .finish()
    }
}

impl Font {
    pub(crate) fn key(&self) -> &str {
        &self.face.key
    }
}

pub(crate) struct FaceData {
    pub(crate) key: String,
    pub(crate) bytes: Arc<Vec<u8>>,
    pub(crate) index: u32,
    pub(crate) render: vello_cpu::peniko::FontData,
}

/// System font database plus a cache of loaded face bytes.
pub struct FontLibrary {
    db: fontdb::Database,
    faces: Mutex<HashMap<fontdb::ID, Arc<FaceData>>>,
}

impl FontLibrary {
    /// Load every font installed on the host.
    pub fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        Self::from_database(db)
    }

    pub fn from_database(db: fontdb::Database) -> Self {
        Self {
            db,
            faces: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Resolve `role` at `size_px`.
    ///
    /// Missing preferred families fall back to sans-serif and then to the installed face with
    /// the nearest weight. Only a database without any face is an error.
    pub fn select(&self, role: FontRole, size_px: f32) -> ArtResult<Font> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ArtError::validation("font size_px must be finite and > 0"));
        }

        let weight = role.weight();
        let preferred = role.preferred_family();
        let (id, fallback) = match self.query(&[fontdb::Family::Name(preferred)], weight) {
            Some(id) => (id, false),
            None => {
                let mut families = vec![fontdb::Family::SansSerif];
                families.extend(FALLBACK_FAMILIES.iter().map(|f| fontdb::Family::Name(f)));
                let id = self
                    .query(&families, weight)
                    .or_else(|| self.nearest_weight(weight))
                    .ok_or_else(|| ArtError::font("no font faces are installed"))?;
                (id, true)
            }
        };

        let info = self
            .db
            .face(id)
            .ok_or_else(|| ArtError::font("font database lost a queried face"))?;
        let family = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| info.post_script_name.clone());
        if fallback {
            tracing::debug!(?role, preferred, resolved = %family, "preferred font family unavailable");
        }

        Ok(Font {
            role,
            size_px,
            weight,
            family,
            fallback,
            face: self.face_data(id)?,
        })
    }

    fn query(&self, families: &[fontdb::Family<'_>], weight: u16) -> Option<fontdb::ID> {
        self.db.query(&fontdb::Query {
            families,
            weight: fontdb::Weight(weight),
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        })
    }

    fn nearest_weight(&self, weight: u16) -> Option<fontdb::ID> {
        self.db
            .faces()
            .filter(|f| f.style == fontdb::Style::Normal)
            .chain(self.db.faces())
            .min_by_key(|f| f.weight.0.abs_diff(weight))
            .map(|f| f.id)
    }

    fn face_data(&self, id: fontdb::ID) -> ArtResult<Arc<FaceData>> {
        let mut faces = self
            .faces
            .lock()
            .map_err(|_| ArtError::font("font cache poisoned"))?;
        if let Some(face) = faces.get(&id) {
            return Ok(face.clone());
        }

        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| ArtError::font("failed to read font face data"))?;
        let key = self
            .db
            .face(id)
            .map(|f| format!("{}#{}", f.post_script_name, f.index))
            .unwrap_or_else(|| format!("{id:?}"));
        let render = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(bytes.clone()),
            index,
        );
        let face = Arc::new(FaceData {
            key,
            bytes: Arc::new(bytes),
            index,
            render,
        });
        faces.insert(id, face.clone());
        Ok(face)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
