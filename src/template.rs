use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::document::{Dimensions, Document};
use crate::element::{BackgroundFill, Element, factory};
use crate::error::TemplateError;
use crate::id_generator::ElementId;

/// Id reserved for the blank canvas
pub const BLANK_TEMPLATE_ID: u32 = 0;

/// Starting point for a design: canvas size plus seed elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub dimensions: Dimensions,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Template {
    /// White canvas of the configured default size
    pub fn blank(config: &EditorConfig) -> Self {
        Self {
            id: BLANK_TEMPLATE_ID,
            name: "Blank Canvas".to_string(),
            category: String::new(),
            dimensions: config.default_dimensions,
            elements: vec![factory::create_background_with_id(
                ElementId::new("bg0"),
                BackgroundFill::Color(config.blank_background.clone()),
            )],
        }
    }

    pub fn is_blank(&self) -> bool {
        self.id == BLANK_TEMPLATE_ID
    }

    pub fn to_document(&self) -> Document {
        Document::new(self.dimensions, self.elements.clone())
    }
}

/// Templates offered by the editor
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// The catalog shipped with the editor
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_json(BUILTIN_TEMPLATES)
    }

    pub fn get(&self, id: u32) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category.as_str()) {
                categories.push(&template.category);
            }
        }
        categories
    }

    /// Template for an optional id; `None` yields the blank canvas.
    pub fn resolve(
        &self,
        id: Option<u32>,
        config: &EditorConfig,
    ) -> Result<Template, TemplateError> {
        match id {
            None => Ok(Template::blank(config)),
            Some(BLANK_TEMPLATE_ID) => Ok(Template::blank(config)),
            Some(id) => self.get(id).cloned().ok_or(TemplateError::UnknownTemplate(id)),
        }
    }
}

const BUILTIN_TEMPLATES: &str = r##"[
  {
    "id": 1,
    "name": "Instagram Post",
    "category": "social",
    "dimensions": { "width": 1080, "height": 1080 },
    "elements": [
      { "id": "bg1", "type": "background", "color": "#4F46E5",
        "gradient": "linear-gradient(135deg, #667eea 0%, #764ba2 100%)" },
      { "id": "text1", "type": "text", "content": "Sua Mensagem Aqui", "x": 100, "y": 400,
        "fontSize": 48, "fontWeight": "bold", "color": "#FFFFFF", "fontFamily": "Arial" }
    ]
  },
  {
    "id": 2,
    "name": "Facebook Cover",
    "category": "social",
    "dimensions": { "width": 1200, "height": 630 },
    "elements": [
      { "id": "bg2", "type": "background", "color": "#1877F2",
        "gradient": "linear-gradient(90deg, #1877F2 0%, #42A5F5 100%)" },
      { "id": "text2", "type": "text", "content": "Capa do Facebook", "x": 50, "y": 250,
        "fontSize": 64, "fontWeight": "bold", "color": "#FFFFFF", "fontFamily": "Arial" }
    ]
  },
  {
    "id": 3,
    "name": "Banner Web",
    "category": "web",
    "dimensions": { "width": 1200, "height": 400 },
    "elements": [
      { "id": "bg3", "type": "background", "color": "#059669",
        "gradient": "linear-gradient(45deg, #059669 0%, #10B981 100%)" },
      { "id": "text3", "type": "text", "content": "Banner Promocional", "x": 100, "y": 150,
        "fontSize": 42, "fontWeight": "bold", "color": "#FFFFFF", "fontFamily": "Arial" }
    ]
  },
  {
    "id": 4,
    "name": "Story Instagram",
    "category": "social",
    "dimensions": { "width": 1080, "height": 1920 },
    "elements": [
      { "id": "bg4", "type": "background", "color": "#EC4899",
        "gradient": "linear-gradient(180deg, #EC4899 0%, #F59E0B 100%)" },
      { "id": "text4", "type": "text", "content": "Story", "x": 100, "y": 800,
        "fontSize": 72, "fontWeight": "bold", "color": "#FFFFFF", "fontFamily": "Arial" }
    ]
  },
  {
    "id": 5,
    "name": "LinkedIn Post",
    "category": "social",
    "dimensions": { "width": 1200, "height": 627 },
    "elements": [
      { "id": "bg5", "type": "background", "color": "#0A66C2",
        "gradient": "linear-gradient(135deg, #0A66C2 0%, #004182 100%)" },
      { "id": "text5", "type": "text", "content": "Post LinkedIn", "x": 100, "y": 250,
        "fontSize": 48, "fontWeight": "bold", "color": "#FFFFFF", "fontFamily": "Arial" }
    ]
  },
  {
    "id": 6,
    "name": "YouTube Thumbnail",
    "category": "social",
    "dimensions": { "width": 1280, "height": 720 },
    "elements": [
      { "id": "bg6", "type": "background", "color": "#FF0000",
        "gradient": "linear-gradient(45deg, #FF0000 0%, #FF4444 100%)" },
      { "id": "text6", "type": "text", "content": "THUMBNAIL", "x": 100, "y": 300,
        "fontSize": 64, "fontWeight": "bold", "color": "#FFFFFF", "fontFamily": "Arial" }
    ]
  }
]"##;
