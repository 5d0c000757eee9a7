// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use qrcode::EcLevel;
use qrcode::QrCode;
use qrcode::render::svg;
use qrcode::render::unicode;

use crate::error::Fallible;

/// Size of one QR module in the SVG, in pixels.
const MODULE_SIZE: u32 = 10;

fn encode(payload: &str) -> Fallible<QrCode> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?;
    Ok(code)
}

/// Render the payload as an SVG image for the results screen.
pub fn render_svg(payload: &str) -> Fallible<String> {
    let code = encode(payload)?;
    let image = code
        .render::<svg::Color>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(image)
}

/// Render the payload with half-block characters, for the terminal.
pub fn render_terminal(payload: &str) -> Fallible<String> {
    let code = encode(payload)?;
    let image = code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build();
    Ok(image)
}
