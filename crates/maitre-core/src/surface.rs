#![forbid(unsafe_code)]

//! Bundle of host capabilities handed to every overlay instance.

use std::fmt;
use std::rc::Rc;

use crate::focus::FocusControl;
use crate::host::OverlayHost;
use crate::listener::ListenerRegistry;
use crate::measure::Geometry;

/// Shared handles to the capabilities of one rendering surface.
///
/// Cloning is cheap (reference counts only). All instances on a page share
/// the same surface; each instance's own state stays private to it.
#[derive(Clone)]
pub struct Surface {
    pub geometry: Rc<dyn Geometry>,
    pub listeners: Rc<dyn ListenerRegistry>,
    pub host: Rc<dyn OverlayHost>,
    pub focus: Rc<dyn FocusControl>,
}

impl Surface {
    /// Build a surface from individual capabilities.
    pub fn new(
        geometry: Rc<dyn Geometry>,
        listeners: Rc<dyn ListenerRegistry>,
        host: Rc<dyn OverlayHost>,
        focus: Rc<dyn FocusControl>,
    ) -> Self {
        Self {
            geometry,
            listeners,
            host,
            focus,
        }
    }

    /// Build a surface from one object that implements every capability.
    pub fn from_shared<T>(document: &Rc<T>) -> Self
    where
        T: Geometry + ListenerRegistry + OverlayHost + FocusControl + 'static,
    {
        Self {
            geometry: document.clone(),
            listeners: document.clone(),
            host: document.clone(),
            focus: document.clone(),
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface").finish_non_exhaustive()
    }
}
