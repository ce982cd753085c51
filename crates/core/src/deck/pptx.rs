use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

use crate::deck::{BodyElement, Bullet, MetricBox, SlideLayout, SlideSpec};

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const EMU_PER_INCH: f64 = 914_400.0;

// 13.33in x 7.5in widescreen canvas.
const SLIDE_CX: i64 = 12_188_952;
const SLIDE_CY: i64 = 6_858_000;

// Fixed three-column metric grid; only the text varies per deck.
const METRIC_COLUMNS_IN: [f64; 3] = [0.5, 4.8, 9.0];
const METRIC_TOP_IN: f64 = 2.0;
const METRIC_WIDTH_IN: f64 = 3.8;
const METRIC_HEIGHT_IN: f64 = 1.5;

const METRIC_FILL: &str = "F0F0F0";
const METRIC_LINE: &str = "C8C8C8";
const METRIC_LABEL_COLOR: &str = "646464";
const METRIC_VALUE_COLOR: &str = "323232";

/// Serialize composed slides into a complete pptx package (a zip of OOXML
/// parts). Slide XML is rendered before anything is written, so a rejected
/// slide produces no bytes at all.
pub fn write_package(slides: &[SlideSpec], now_utc: DateTime<Utc>) -> Result<Vec<u8>> {
    let slide_xmls = slides
        .iter()
        .map(slide_xml)
        .collect::<Result<Vec<_>>>()?;

    let deck_title = slides.first().map(|s| s.title.as_str()).unwrap_or("Report");

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));

    add_part(&mut zip, "[Content_Types].xml", &content_types_xml(slides.len()))?;
    add_part(&mut zip, "_rels/.rels", &root_rels_xml())?;
    add_part(&mut zip, "docProps/core.xml", &core_props_xml(deck_title, now_utc))?;
    add_part(&mut zip, "docProps/app.xml", &app_props_xml(slides.len()))?;
    add_part(&mut zip, "ppt/presentation.xml", &presentation_xml(slides.len()))?;
    add_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels_xml(slides.len()),
    )?;
    add_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER_XML)?;
    add_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        SLIDE_MASTER_RELS_XML,
    )?;
    add_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT_XML)?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        SLIDE_LAYOUT_RELS_XML,
    )?;
    add_part(&mut zip, "ppt/theme/theme1.xml", THEME_XML)?;

    for (i, xml) in slide_xmls.iter().enumerate() {
        let n = i + 1;
        add_part(&mut zip, &format!("ppt/slides/slide{n}.xml"), xml)?;
        add_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            &slide_rels_xml(),
        )?;
    }

    let cursor = zip.finish().context("failed to finalize pptx archive")?;
    Ok(cursor.into_inner())
}

fn add_part(zip: &mut zip::ZipWriter<Cursor<Vec<u8>>>, name: &str, xml: &str) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(name, options)
        .with_context(|| format!("failed to start pptx part {name}"))?;
    zip.write_all(xml.as_bytes())
        .with_context(|| format!("failed to write pptx part {name}"))?;
    Ok(())
}

fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// Shape id 1 is reserved for the slide's group shape.
struct ShapeIds(u32);

impl ShapeIds {
    fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

fn slide_xml(spec: &SlideSpec) -> Result<String> {
    let mut ids = ShapeIds(1);
    let mut shapes = String::new();

    match spec.layout {
        SlideLayout::Title => shapes.push_str(&text_shape(
            ids.next(),
            "Title",
            emu(0.92),
            emu(2.4),
            emu(11.49),
            emu(1.2),
            &[plain_paragraph(&spec.title, 4000, false, None, true)],
        )),
        SlideLayout::TitleAndBody => shapes.push_str(&text_shape(
            ids.next(),
            "Title",
            emu(0.5),
            emu(0.3),
            emu(12.33),
            emu(1.0),
            &[plain_paragraph(&spec.title, 3200, false, None, false)],
        )),
    }

    for element in &spec.body {
        match element {
            BodyElement::Subtitle(text) => shapes.push_str(&text_shape(
                ids.next(),
                "Subtitle",
                emu(0.92),
                emu(3.7),
                emu(11.49),
                emu(0.8),
                &[plain_paragraph(text, 2000, false, None, true)],
            )),
            BodyElement::DateStamp(text) => shapes.push_str(&text_shape(
                ids.next(),
                "Date",
                emu(0.5),
                emu(6.5),
                emu(12.0),
                emu(0.5),
                &[plain_paragraph(text, 1400, false, None, false)],
            )),
            BodyElement::Bullets(bullets) => {
                let paragraphs: Vec<String> = bullets.iter().map(bullet_paragraph).collect();
                shapes.push_str(&text_shape(
                    ids.next(),
                    "Body",
                    emu(0.5),
                    emu(1.5),
                    emu(12.33),
                    emu(5.3),
                    &paragraphs,
                ));
            }
            BodyElement::MetricRow(row) => {
                if row.len() > METRIC_COLUMNS_IN.len() {
                    bail!(
                        "metric row holds {} boxes but the grid has {} columns",
                        row.len(),
                        METRIC_COLUMNS_IN.len()
                    );
                }
                for (column, metric) in row.iter().enumerate() {
                    shapes.push_str(&metric_box_shapes(&mut ids, column, metric));
                }
            }
            BodyElement::InfoBlock { heading, lines } => {
                let mut paragraphs = vec![plain_paragraph(heading, 1800, true, None, false)];
                paragraphs.extend(
                    lines
                        .iter()
                        .map(|line| plain_paragraph(line, 1800, false, None, false)),
                );
                shapes.push_str(&text_shape(
                    ids.next(),
                    "Additional Info",
                    emu(0.5),
                    emu(4.0),
                    emu(12.0),
                    emu(2.5),
                    &paragraphs,
                ));
            }
            BodyElement::ContactLine(text) => shapes.push_str(&text_shape(
                ids.next(),
                "Contact",
                emu(0.5),
                emu(5.5),
                emu(12.0),
                emu(1.0),
                &[plain_paragraph(text, 1400, false, None, false)],
            )),
        }
    }

    Ok(format!(
        r#"{XML_DECL}
<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>{shapes}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    ))
}

fn text_shape(
    id: u32,
    name: &str,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
    paragraphs: &[String],
) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square"/><a:lstStyle/>{}</p:txBody></p:sp>"#,
        paragraphs.concat()
    )
}

fn metric_box_shapes(ids: &mut ShapeIds, column: usize, metric: &MetricBox) -> String {
    let left = emu(METRIC_COLUMNS_IN[column]);
    let top = emu(METRIC_TOP_IN);
    let width = emu(METRIC_WIDTH_IN);
    let height = emu(METRIC_HEIGHT_IN);

    let rect = format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Metric Box {n}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="{left}" y="{top}"/><a:ext cx="{width}" cy="{height}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{METRIC_FILL}"/></a:solidFill><a:ln><a:solidFill><a:srgbClr val="{METRIC_LINE}"/></a:solidFill></a:ln></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"#,
        id = ids.next(),
        n = column + 1,
    );

    let label = text_shape(
        ids.next(),
        &format!("Metric Label {}", column + 1),
        left,
        top + emu(0.1),
        width,
        emu(0.5),
        &[plain_paragraph(&metric.label, 1400, false, Some(METRIC_LABEL_COLOR), true)],
    );

    let value = text_shape(
        ids.next(),
        &format!("Metric Value {}", column + 1),
        left,
        top + emu(0.5),
        width,
        emu(0.8),
        &[plain_paragraph(&metric.value, 2800, true, Some(METRIC_VALUE_COLOR), true)],
    );

    format!("{rect}{label}{value}")
}

fn plain_paragraph(
    text: &str,
    size_hundredths: u32,
    bold: bool,
    color: Option<&str>,
    centered: bool,
) -> String {
    let ppr = if centered { r#"<a:pPr algn="ctr"/>"# } else { "" };
    format!("<a:p>{ppr}{}</a:p>", run(text, size_hundredths, bold, color))
}

fn bullet_paragraph(bullet: &Bullet) -> String {
    // One indent stop per nesting level.
    let margin_left = 228_600 + u32::from(bullet.level) * 457_200;
    let size = if bullet.level == 0 { 1800 } else { 1600 };
    format!(
        r#"<a:p><a:pPr marL="{margin_left}" indent="-228600"><a:buFont typeface="Arial"/><a:buChar char="&#8226;"/></a:pPr>{}</a:p>"#,
        run(&bullet.text, size, false, None)
    )
}

fn run(text: &str, size_hundredths: u32, bold: bool, color: Option<&str>) -> String {
    let bold_attr = if bold { r#" b="1""# } else { "" };
    let fill = match color {
        Some(hex) => format!(r#"<a:solidFill><a:srgbClr val="{hex}"/></a:solidFill>"#),
        None => String::new(),
    };
    format!(
        r#"<a:r><a:rPr lang="en-US" sz="{size_hundredths}"{bold_attr}>{fill}</a:rPr><a:t>{}</a:t></a:r>"#,
        xml_escape(text)
    )
}

fn content_types_xml(slide_count: usize) -> String {
    let mut overrides = String::new();
    for n in 1..=slide_count {
        overrides.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        ));
    }
    format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/><Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/><Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/><Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>{overrides}<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/></Types>"#
    )
}

fn root_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#
    )
}

fn presentation_xml(slide_count: usize) -> String {
    let mut slide_ids = String::new();
    for n in 1..=slide_count {
        // sldId values start at 256; rId1 points at the master.
        let id = 255 + n;
        let rid = n + 1;
        slide_ids.push_str(&format!(r#"<p:sldId id="{id}" r:id="rId{rid}"/>"#));
    }
    format!(
        r#"{XML_DECL}
<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst>{slide_ids}</p:sldIdLst><p:sldSz cx="{SLIDE_CX}" cy="{SLIDE_CY}"/><p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
    )
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = String::from(
        r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#,
    );
    for n in 1..=slide_count {
        let rid = n + 1;
        rels.push_str(&format!(
            r#"<Relationship Id="rId{rid}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{n}.xml"/>"#
        ));
    }
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
    )
}

fn slide_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/></Relationships>"#
    )
}

fn core_props_xml(title: &str, now_utc: DateTime<Utc>) -> String {
    let stamp = now_utc.format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"{XML_DECL}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:title>{}</dc:title><dc:creator>reachdeck</dc:creator><dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified></cp:coreProperties>"#,
        xml_escape(title)
    )
}

fn app_props_xml(slide_count: usize) -> String {
    format!(
        r#"{XML_DECL}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>reachdeck</Application><Slides>{slide_count}</Slides><PresentationFormat>Widescreen</PresentationFormat></Properties>"#
    )
}

const SLIDE_MASTER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:bg><p:bgPr><a:solidFill><a:schemeClr val="lt1"/></a:solidFill><a:effectLst/></p:bgPr></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle/><p:bodyStyle/><p:otherStyle/></p:txStyles></p:sldMaster>"#;

const SLIDE_MASTER_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/></Relationships>"#;

const SLIDE_LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#;

const SLIDE_LAYOUT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#;

const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements><a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="44546A"/></a:dk2><a:lt2><a:srgbClr val="E7E6E6"/></a:lt2><a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2><a:accent3><a:srgbClr val="A5A5A5"/></a:accent3><a:accent4><a:srgbClr val="FFC000"/></a:accent4><a:accent5><a:srgbClr val="5B9BD5"/></a:accent5><a:accent6><a:srgbClr val="70AD47"/></a:accent6><a:hlink><a:srgbClr val="0563C1"/></a:hlink><a:folHlink><a:srgbClr val="954F72"/></a:folHlink></a:clrScheme><a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::compose;
    use crate::domain::analysis::AnalysisResult;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap()
    }

    fn open(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
        zip::ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    fn bare_slide(title: &str) -> SlideSpec {
        SlideSpec {
            layout: SlideLayout::TitleAndBody,
            title: title.to_string(),
            body: Vec::new(),
        }
    }

    #[test]
    fn package_has_one_slide_part_per_composed_slide() {
        let slides = vec![bare_slide("One"), bare_slide("Two")];
        let bytes = write_package(&slides, fixed_now()).unwrap();
        let mut archive = open(bytes);

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
        assert!(archive.by_name("ppt/slides/slide3.xml").is_err());
    }

    #[test]
    fn slide_text_is_xml_escaped() {
        let spec = bare_slide("Gaming & <Tech>");
        let xml = slide_xml(&spec).unwrap();

        assert!(xml.contains("Gaming &amp; &lt;Tech&gt;"));
        assert!(!xml.contains("Gaming & <Tech>"));
    }

    #[test]
    fn metric_row_fills_three_grid_columns() {
        let mut spec = bare_slide("Stats");
        spec.body = vec![BodyElement::MetricRow(vec![
            MetricBox::new("Subscribers", "2.5M"),
            MetricBox::new("Total Views", "48.0M"),
            MetricBox::new("Total Videos", "312"),
        ])];

        let xml = slide_xml(&spec).unwrap();

        assert_eq!(xml.matches("Metric Box").count(), 3);
        assert_eq!(xml.matches(METRIC_FILL).count(), 3);
        // Third column sits at 9.0in on the fixed grid.
        assert!(xml.contains(&format!(r#"x="{}""#, emu(9.0))));
    }

    #[test]
    fn metric_row_wider_than_the_grid_is_rejected_before_any_output() {
        let mut spec = bare_slide("Stats");
        spec.body = vec![BodyElement::MetricRow(
            (1..=4).map(|i| MetricBox::new(format!("m{i}"), "1")).collect(),
        )];

        let err = write_package(&[spec], fixed_now()).unwrap_err();

        assert!(err.to_string().contains("grid has 3 columns"));
    }

    #[test]
    fn composed_deck_round_trips_through_a_zip_reader() {
        let analysis = AnalysisResult {
            youtube: None,
            tiktok: None,
            suggestions: vec!["tip".to_string()],
        };
        let slides = compose::compose_slides(&analysis, Some("Ada"), fixed_now());
        let bytes = write_package(&slides, fixed_now()).unwrap();

        let archive = open(bytes);
        let slide_parts = archive
            .file_names()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .count();

        assert_eq!(slide_parts, slides.len());
    }
}
