//! Glue for exposing a resolver to a template engine.
//!
//! Three functions are provided, each taking any number of entry names:
//! - `vite_js(entries...)`
//! - `vite_css(entries...)`
//! - `vite_preload(entries...)`
//!
//! Their output is trusted HTML. Hosts must mark it safe instead of escaping it.

use std::sync::Arc;

use crate::error::{Result, ViteError};
use crate::render::Markup;
use crate::resolver::AssetResolver;

/// Boxed template function as handed to a [`FunctionRegistry`].
pub type BoxedFunction = Box<dyn Fn(&[&str]) -> Result<Markup> + Send + Sync>;

/// Host side of the integration: anything functions can be registered into.
pub trait FunctionRegistry {
  /// Register `function` under `name`. `safe_html` tells the host not to escape output.
  fn register_function(&mut self, name: &'static str, safe_html: bool, function: BoxedFunction);
}

/// The functions exposed to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFunction {
  /// `vite_js`: module script tags.
  Scripts,
  /// `vite_css`: stylesheet link tags.
  Styles,
  /// `vite_preload`: modulepreload link tags.
  Preloads,
}

impl TemplateFunction {
  /// Every function, in registration order.
  pub const ALL: [Self; 3] = [Self::Scripts, Self::Styles, Self::Preloads];

  /// Name the function is registered under.
  pub fn name(self) -> &'static str {
    match self {
      Self::Scripts => "vite_js",
      Self::Styles => "vite_css",
      Self::Preloads => "vite_preload",
    }
  }

  /// Inverse of [`TemplateFunction::name`].
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|function| function.name() == name)
  }

  /// All functions emit pre-rendered HTML.
  pub fn is_safe_html(self) -> bool {
    true
  }

  fn invoke<R: AssetResolver + ?Sized>(self, resolver: &R, entries: &[&str]) -> Result<Markup> {
    match self {
      Self::Scripts => resolver.render_scripts(entries),
      Self::Styles => resolver.render_styles(entries),
      Self::Preloads => resolver.render_preloads(entries),
    }
  }
}

/// Template extension wrapping a shared resolver.
pub struct ViteFunctions<R> {
  resolver: Arc<R>,
}

impl<R> Clone for ViteFunctions<R> {
  fn clone(&self) -> Self {
    Self {
      resolver: Arc::clone(&self.resolver),
    }
  }
}

impl<R: AssetResolver + Send + Sync + 'static> ViteFunctions<R> {
  /// Wrap `resolver` for template use.
  pub fn new(resolver: R) -> Self {
    Self::from_shared(Arc::new(resolver))
  }

  /// Wrap a resolver that is already shared with other parts of the application.
  pub fn from_shared(resolver: Arc<R>) -> Self {
    Self { resolver }
  }

  /// The wrapped resolver.
  pub fn resolver(&self) -> &R {
    &self.resolver
  }

  /// Call a template function by name.
  pub fn call(&self, name: &str, entries: &[&str]) -> Result<Markup> {
    let function = TemplateFunction::from_name(name).ok_or_else(|| ViteError::UnknownFunction {
      name: name.to_string(),
    })?;
    function.invoke(self.resolver.as_ref(), entries)
  }

  /// Register every function into `registry`.
  pub fn register(&self, registry: &mut impl FunctionRegistry) {
    for function in TemplateFunction::ALL {
      let resolver = Arc::clone(&self.resolver);
      registry.register_function(
        function.name(),
        function.is_safe_html(),
        Box::new(move |entries: &[&str]| function.invoke(resolver.as_ref(), entries)),
      );
    }
  }
}
