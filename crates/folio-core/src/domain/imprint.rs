use serde::{Deserialize, Serialize};

use crate::catalog::{ImprintMethod, ImprintOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoilStamping {
  pub font: String,
  pub color: String,
  pub position: String,
  pub lines: Vec<String>,
}

/// Bajorrelieve. La posición es fija, así que no se guarda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debossing {
  pub font: String,
  pub color: String,
  pub lines: Vec<String>,
}

/// Personalización de texto de la portada (grabado / imprinting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Imprint {
  FoilStamping(FoilStamping),
  StandardDebossing(Debossing),
}

impl Imprint {
  /// Personalización recién abierta: primera tipografía, color por defecto
  /// (o el primero de `colors`, que ya viene filtrado por la política) y
  /// líneas en blanco.
  pub fn fresh(method: ImprintMethod, options: &ImprintOptions, colors: &[String]) -> Self {
    let method_options = options.for_method(method);
    let font = method_options.fonts.first().cloned().unwrap_or_default();
    let color = method_options
      .default_color
      .as_ref()
      .filter(|c| colors.contains(*c))
      .or_else(|| colors.first())
      .cloned()
      .unwrap_or_default();
    let lines = vec![String::new(); options.max_lines];

    match method {
      ImprintMethod::FoilStamping => Imprint::FoilStamping(FoilStamping {
        font,
        color,
        position: method_options.positions.first().cloned().unwrap_or_default(),
        lines,
      }),
      ImprintMethod::StandardDebossing => Imprint::StandardDebossing(Debossing { font, color, lines }),
    }
  }

  pub fn method(&self) -> ImprintMethod {
    match self {
      Imprint::FoilStamping(_) => ImprintMethod::FoilStamping,
      Imprint::StandardDebossing(_) => ImprintMethod::StandardDebossing,
    }
  }

  pub fn font(&self) -> &str {
    match self {
      Imprint::FoilStamping(f) => &f.font,
      Imprint::StandardDebossing(d) => &d.font,
    }
  }

  pub fn color(&self) -> &str {
    match self {
      Imprint::FoilStamping(f) => &f.color,
      Imprint::StandardDebossing(d) => &d.color,
    }
  }

  pub fn lines(&self) -> &[String] {
    match self {
      Imprint::FoilStamping(f) => &f.lines,
      Imprint::StandardDebossing(d) => &d.lines,
    }
  }

  /// Posición efectiva: la elegida en foil, la fija del catálogo en bajorrelieve.
  pub fn placement<'a>(&'a self, options: &'a ImprintOptions) -> &'a str {
    match self {
      Imprint::FoilStamping(f) => &f.position,
      Imprint::StandardDebossing(_) => &options.fixed_position,
    }
  }

  pub(crate) fn font_mut(&mut self) -> &mut String {
    match self {
      Imprint::FoilStamping(f) => &mut f.font,
      Imprint::StandardDebossing(d) => &mut d.font,
    }
  }

  pub(crate) fn color_mut(&mut self) -> &mut String {
    match self {
      Imprint::FoilStamping(f) => &mut f.color,
      Imprint::StandardDebossing(d) => &mut d.color,
    }
  }

  pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
    match self {
      Imprint::FoilStamping(f) => &mut f.lines,
      Imprint::StandardDebossing(d) => &mut d.lines,
    }
  }

  /// Líneas con texto, sin las que quedaron en blanco.
  pub fn filled_lines(&self) -> Vec<&str> {
    self.lines().iter().map(|l| l.trim()).filter(|l| !l.is_empty()).collect()
  }
}
