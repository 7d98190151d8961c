//! Detail panel content for a selected region.
//!
//! The panel lists the region name, the primary date and one section per
//! party that holds a contest there. Each rendering replaces the previous
//! panel wholesale.

use std::io::Write;

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::Serialize;
use tracing::debug;

use dmap_model::{DISPLAY_DATE_FORMAT, Party, PrimaryRecord};

use crate::config::{LinkExclusions, MapConfig, PARTY_PLACEHOLDER, REGION_PLACEHOLDER};
use crate::error::{MapError, Result};
use crate::index::RegionRecords;

const LINK_TITLE: &str = "Forecasts by 538";
const DETAIL_STYLE: &str = "font-size: 14px";

/// Builds forecast hyperlinks, honouring the per-party exclusion sets.
#[derive(Debug, Clone)]
pub struct ForecastLinks {
    template: String,
    exclusions: LinkExclusions,
}

impl ForecastLinks {
    pub fn new(template: impl Into<String>, exclusions: LinkExclusions) -> Self {
        Self {
            template: template.into(),
            exclusions,
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(
            config.forecast_url_template.clone(),
            config.link_exclusions.clone(),
        )
    }

    /// Forecast URL, or `None` for regions without a forecast page.
    pub fn url_for(&self, party: Party, region_name: &str) -> Option<String> {
        if self.exclusions.excludes(party, region_name) {
            return None;
        }
        Some(
            self.template
                .replace(REGION_PLACEHOLDER, &region_name.to_lowercase())
                .replace(PARTY_PLACEHOLDER, party.slug()),
        )
    }
}

/// One party's block in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartySection {
    pub party: Party,
    pub delegates: u32,
    /// Forecast link wrapping the delegate line, when the region has one.
    pub link: Option<String>,
    /// Party-specific line ("Super delegates: 4").
    pub detail: String,
}

impl PartySection {
    pub fn delegate_line(&self) -> String {
        format!("{} delegates: {}", self.party.label(), self.delegates)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanel {
    pub region_name: String,
    pub date: Option<NaiveDate>,
    pub sections: Vec<PartySection>,
}

impl DetailPanel {
    /// Build the panel from a region's records.
    ///
    /// The date comes from the Democratic record, falling back to the
    /// Republican one. Without any record the date line is omitted.
    pub fn build(
        region_name: &str,
        democratic: Option<&PrimaryRecord>,
        republican: Option<&PrimaryRecord>,
        links: &ForecastLinks,
    ) -> Self {
        let date = democratic.or(republican).map(|record| record.date);
        if date.is_none() {
            debug!(region = region_name, "no primary records; omitting date line");
        }
        let sections = [democratic, republican]
            .into_iter()
            .flatten()
            .map(|record| PartySection {
                party: record.party(),
                delegates: record.delegates,
                link: links.url_for(record.party(), region_name),
                detail: record.detail.describe(),
            })
            .collect();
        Self {
            region_name: region_name.to_string(),
            date,
            sections,
        }
    }

    pub fn for_records(records: &RegionRecords<'_>, links: &ForecastLinks) -> Self {
        Self::build(
            &records.region.name,
            records.democratic,
            records.republican,
            links,
        )
    }

    pub fn date_line(&self) -> Option<String> {
        self.date
            .map(|date| format!("Primary Date: {}", date.format(DISPLAY_DATE_FORMAT)))
    }

    pub fn section(&self, party: Party) -> Option<&PartySection> {
        self.sections.iter().find(|section| section.party == party)
    }

    /// Visible text, one line per panel row.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.region_name.clone()];
        lines.extend(self.date_line());
        for section in &self.sections {
            lines.push(section.delegate_line());
            lines.push(section.detail.clone());
        }
        lines
    }

    pub fn to_text(&self) -> String {
        self.lines().join("\n")
    }

    /// Write the panel as HTML fragments.
    pub fn write_markup<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        write_div(writer, &[("class", "region-name")], &self.region_name)?;
        if let Some(line) = self.date_line() {
            write_div(writer, &[("class", "election-date")], &line)?;
        }
        for section in &self.sections {
            start(writer, "div", &[("class", "party-info")])?;
            match &section.link {
                Some(url) => {
                    start(writer, "div", &[])?;
                    write_element(
                        writer,
                        "a",
                        &[("target", "_blank"), ("title", LINK_TITLE), ("href", url.as_str())],
                        &section.delegate_line(),
                    )?;
                    end(writer, "div")?;
                }
                None => write_div(writer, &[], &section.delegate_line())?,
            }
            write_div(writer, &[("style", DETAIL_STYLE)], &section.detail)?;
            end(writer, "div")?;
        }
        Ok(())
    }

    pub fn to_markup(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_markup(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(MapError::markup)
    }
}

pub(crate) fn start<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<()> {
    let mut element = BytesStart::new(name);
    for attribute in attributes {
        element.push_attribute(*attribute);
    }
    writer
        .write_event(Event::Start(element))
        .map_err(MapError::markup)
}

pub(crate) fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(MapError::markup)
}

pub(crate) fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    start(writer, name, attributes)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(MapError::markup)?;
    end(writer, name)
}

fn write_div<W: Write>(
    writer: &mut Writer<W>,
    attributes: &[(&str, &str)],
    text: &str,
) -> Result<()> {
    write_element(writer, "div", attributes, text)
}

#[cfg(test)]
mod tests {
    use dmap_model::PartyDetail;

    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, m, d).unwrap()
    }

    fn dem(name: &str, on: NaiveDate, total: u32, supers: u32) -> PrimaryRecord {
        PrimaryRecord {
            region_name: name.to_string(),
            date: on,
            primary_type: "primary".to_string(),
            delegates: total,
            detail: PartyDetail::Democratic {
                super_delegates: supers,
            },
        }
    }

    fn gop(name: &str, on: NaiveDate, total: u32, method: &str) -> PrimaryRecord {
        PrimaryRecord {
            region_name: name.to_string(),
            date: on,
            primary_type: "primary".to_string(),
            delegates: total,
            detail: PartyDetail::Republican {
                method: method.to_string(),
            },
        }
    }

    fn links() -> ForecastLinks {
        ForecastLinks::from_config(&MapConfig::default())
    }

    #[test]
    fn date_falls_back_to_republican_record() {
        let gop = gop("Guam", date(3, 12), 9, "unbound");
        let panel = DetailPanel::build("Guam", None, Some(&gop), &links());
        assert_eq!(panel.date_line().as_deref(), Some("Primary Date: 2016-03-12"));
        assert!(panel.section(Party::Democratic).is_none());
        assert_eq!(panel.sections.len(), 1);
    }

    #[test]
    fn democratic_date_wins_when_parties_differ() {
        let dem = dem("Alaska", date(3, 26), 16, 4);
        let gop = gop("Alaska", date(3, 1), 28, "proportional");
        let panel = DetailPanel::build("Alaska", Some(&dem), Some(&gop), &links());
        assert_eq!(panel.date_line().as_deref(), Some("Primary Date: 2016-03-26"));
        assert_eq!(panel.sections.len(), 2);
        assert_eq!(
            panel.lines().iter().filter(|line| line.starts_with("Primary Date")).count(),
            1
        );
    }

    #[test]
    fn no_records_omit_date_and_sections() {
        let panel = DetailPanel::build("Nowhere", None, None, &links());
        assert_eq!(panel.lines(), vec!["Nowhere".to_string()]);
    }

    #[test]
    fn links_use_lowercased_name_and_party() {
        let dem = dem("Iowa", date(2, 1), 44, 8);
        let panel = DetailPanel::build("Iowa", Some(&dem), None, &links());
        assert_eq!(
            panel.section(Party::Democratic).unwrap().link.as_deref(),
            Some("http://projects.fivethirtyeight.com/election-2016/primary-forecast/iowa-democratic")
        );
    }

    #[test]
    fn markup_for_linked_and_plain_sections() {
        let dem = dem("Iowa", date(2, 1), 44, 8);
        let gop = gop("Iowa", date(2, 1), 30, "proportional");
        let links = ForecastLinks::new(
            "http://example.com/{region}-{party}",
            LinkExclusions {
                democratic: Default::default(),
                republican: ["Iowa".to_string()].into(),
            },
        );
        let panel = DetailPanel::build("Iowa", Some(&dem), Some(&gop), &links);
        insta::assert_snapshot!(
            panel.to_markup().unwrap(),
            @r#"<div class="region-name">Iowa</div><div class="election-date">Primary Date: 2016-02-01</div><div class="party-info"><div><a target="_blank" title="Forecasts by 538" href="http://example.com/iowa-democratic">Democratic delegates: 44</a></div><div style="font-size: 14px">Super delegates: 8</div></div><div class="party-info"><div>Republican delegates: 30</div><div style="font-size: 14px">Allocation method: proportional</div></div>"#
        );
    }
}
