//! The host's document-mutation interface.

use geometry::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::shape::Shape;

/// A document-mutation service.
///
/// Calls are order-sensitive: later calls may depend on the document state
/// left by earlier ones.
pub trait Host {
    /// Reads the current document.
    fn read_document(&mut self) -> Result<Document>;

    /// Replaces the document with `document`.
    fn apply_document(&mut self, document: &Document) -> Result<()>;

    /// Moves the document's coordinate origin to `origin`.
    fn set_origin(&mut self, origin: Point) -> Result<()>;

    /// Moves an object to an absolute position, in device units and canvas axes.
    fn move_object(&mut self, id: &str, to: Point) -> Result<()>;

    /// Sets the absolute rotation of an object, in degrees, clockwise in canvas axes.
    fn rotate_object(&mut self, id: &str, degrees: f64) -> Result<()>;

    /// Creates a new board feature.
    fn create_shape(&mut self, shape: &Shape) -> Result<()>;

    /// The ids of the currently selected objects.
    fn selected_ids(&mut self) -> Result<Vec<String>>;
}

/// A reference to an object in a [`Command::MoveObjsTo`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    /// The object id.
    #[serde(rename = "gId")]
    pub id: String,
}

/// One recorded host call, shaped like the host API's own arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "api", content = "args")]
pub enum Command {
    /// `setOriginXY`.
    #[serde(rename = "setOriginXY")]
    SetOrigin {
        /// New origin x-coordinate.
        x: f64,
        /// New origin y-coordinate.
        y: f64,
    },
    /// `moveObjsTo`.
    #[serde(rename = "moveObjsTo")]
    MoveObjsTo {
        /// The objects to move.
        objs: Vec<ObjectRef>,
        /// Destination x-coordinate.
        x: f64,
        /// Destination y-coordinate.
        y: f64,
    },
    /// `rotate`.
    #[serde(rename = "rotate")]
    Rotate {
        /// The objects to rotate.
        ids: Vec<String>,
        /// Absolute rotation, in degrees.
        degree: f64,
    },
    /// `createShape`.
    #[serde(rename = "createShape")]
    CreateShape(Shape),
    /// `applySource`.
    #[serde(rename = "applySource")]
    ApplySource {
        /// The replacement document.
        source: Box<Document>,
        /// Whether to open the document as a new one.
        #[serde(rename = "createNew")]
        create_new: bool,
    },
}

/// A [`Host`] that works on an in-memory document and records every
/// mutating call as a [`Command`].
///
/// Origin changes, moves and applied documents also update the in-memory
/// document, so later reads see them.
///
/// The recorded commands can be serialized and replayed against the real host.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    document: Document,
    selection: Vec<String>,
    commands: Vec<Command>,
}

impl Recorder {
    /// Creates a recorder over `document`, with nothing selected.
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ..Default::default()
        }
    }

    /// Sets the ids reported by [`Host::selected_ids`].
    pub fn with_selection(mut self, selection: impl IntoIterator<Item = String>) -> Self {
        self.selection = selection.into_iter().collect();
        self
    }

    /// The document as last read or applied.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The recorded commands, in call order.
    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consumes the recorder, returning the recorded commands.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Serializes the recorded commands as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }

    fn require(&self, id: &str) -> Result<()> {
        if self.document.head(id).is_some() {
            Ok(())
        } else {
            Err(Error::UnknownObject(id.to_string()))
        }
    }
}

impl Host for Recorder {
    fn read_document(&mut self) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn apply_document(&mut self, document: &Document) -> Result<()> {
        self.document = document.clone();
        self.commands.push(Command::ApplySource {
            source: Box::new(document.clone()),
            create_new: false,
        });
        Ok(())
    }

    fn set_origin(&mut self, origin: Point) -> Result<()> {
        if let Some(canvas) = self.document.canvas.as_mut() {
            canvas.origin_x = origin.x;
            canvas.origin_y = origin.y;
        }
        self.commands.push(Command::SetOrigin {
            x: origin.x,
            y: origin.y,
        });
        Ok(())
    }

    fn move_object(&mut self, id: &str, to: Point) -> Result<()> {
        let head = self
            .document
            .head_mut(id)
            .ok_or_else(|| Error::UnknownObject(id.to_string()))?;
        head.x = Some(to.x);
        head.y = Some(to.y);
        self.commands.push(Command::MoveObjsTo {
            objs: vec![ObjectRef { id: id.to_string() }],
            x: to.x,
            y: to.y,
        });
        Ok(())
    }

    fn rotate_object(&mut self, id: &str, degrees: f64) -> Result<()> {
        self.require(id)?;
        self.commands.push(Command::Rotate {
            ids: vec![id.to_string()],
            degree: degrees,
        });
        Ok(())
    }

    fn create_shape(&mut self, shape: &Shape) -> Result<()> {
        self.commands.push(Command::CreateShape(shape.clone()));
        Ok(())
    }

    fn selected_ids(&mut self) -> Result<Vec<String>> {
        Ok(self.selection.clone())
    }
}
