//! Daily campaign coverage.
//!
//! Turns the structured event log back into the running text a reader
//! follows while the campaign is underway: one block per countdown day,
//! one report per electorate, with quiet days called out. Leader events
//! are nation-wide but appear under the electorate whose slot they used,
//! matching how they were drawn.

use election_core::EventLog;
use election_events::{CampaignDay, CampaignEvent, EventOutcome};

/// Renders one resolved event as its narrative lines.
pub fn render_event(event: &CampaignEvent) -> Vec<String> {
    let place = &event.electorate;
    match &event.outcome {
        EventOutcome::Debate { contenders, winner } => {
            let mut lines = vec![format!(
                "{} and {} have decided to hold a debate",
                contenders[0].name, contenders[1].name
            )];
            match winner {
                Some(victor) => {
                    lines.push(format!(
                        "{} has won the debate for the {}!",
                        victor.name, victor.party
                    ));
                    lines.push(format!(
                        "The electorate's stances on current issues have been influenced \
                         by the points {} made, and their popularity has grown",
                        victor.name
                    ));
                }
                None => lines.push("There was no clear winner of the debate!".to_string()),
            }
            lines
        }
        EventOutcome::Scandal { target, contained } => {
            let mut lines = vec![format!(
                "Oh no! {} has been involved in a scandal!",
                target.name
            )];
            if *contained {
                lines.push(format!(
                    "{} was somehow able to talk themselves out of the scandal!",
                    target.name
                ));
            } else {
                lines.push(format!(
                    "{} has not been able to explain themselves",
                    target.name
                ));
                lines.push(format!(
                    "{} is not happy with how {} has handled the situation",
                    place, target.name
                ));
            }
            lines
        }
        EventOutcome::Prank { target, laughed_off } => {
            let mut lines = vec![format!(
                "{} has played a prank on another candidate",
                target.name
            )];
            if *laughed_off {
                lines.push(format!(
                    "{} found the prank that {} pulled hilarious!",
                    place, target.name
                ));
            } else {
                lines.push(format!(
                    "{} was not impressed with the prank that {} pulled",
                    place, target.name
                ));
            }
            lines
        }
        EventOutcome::LeaderBout { contenders, winner } => {
            let mut lines = vec![format!(
                "Party leaders {} and {} have decided to hold a friendly boxing match in {}",
                contenders[0].name, contenders[1].name, place
            )];
            match winner {
                Some(victor) => {
                    lines.push(format!("{} has won the bout!", victor.name));
                    lines.push(format!(
                        "The nation is impressed with how {} handled the fight",
                        victor.name
                    ));
                }
                None => {
                    lines.push("There was no clear winner of the bout!".to_string());
                    lines.push("The nation is impressed with both leaders!".to_string());
                }
            }
            lines
        }
        EventOutcome::LeaderDebate { contenders, winner } => {
            let mut lines = vec![format!(
                "Party leaders {} and {} have decided to hold a debate in {} today!",
                contenders[0].name, contenders[1].name, place
            )];
            match winner {
                Some(victor) => {
                    lines.push(format!(
                        "{} has won the debate for the {}!",
                        victor.name, victor.party
                    ));
                    lines.push(format!(
                        "The nation's stances on current issues have been influenced \
                         by the points {} made during the debate",
                        victor.name
                    ));
                }
                None => lines.push("There was no clear winner of the debate!".to_string()),
            }
            lines
        }
        EventOutcome::InternationalIssue { issue, swayed } => {
            let mut lines = vec![format!(
                "{} has observed how other countries are handling the {} issue",
                place, issue
            )];
            if *swayed {
                lines.push("Their stances have shifted under international influence".to_string());
            } else {
                lines.push(format!(
                    "Other countries hold similar stances, so {} is happy with its views",
                    place
                ));
            }
            lines
        }
        EventOutcome::IssueDisclosure {
            target,
            issue,
            credible,
        } => {
            let mut lines = vec![format!(
                "Some new information on the {} issue has been released by {}",
                issue, target.name
            )];
            if *credible {
                lines.push(format!(
                    "{} was able to confirm the new information is credible",
                    target.name
                ));
                lines.push(format!(
                    "{} is glad {} shared it, and its stances are now more aligned with {}",
                    place, target.name, target.name
                ));
            } else {
                lines.push(format!(
                    "{} was unable to confirm the new information is credible",
                    target.name
                ));
                lines.push(format!(
                    "{} is unhappy {} would spread fake information, and its stances \
                     are now less aligned with {}",
                    place, target.name, target.name
                ));
            }
            lines
        }
    }
}

/// Renders the whole campaign as day-by-day coverage.
///
/// `electorates` fixes the report order inside each day; events are pulled
/// from the log by countdown day.
pub fn render_campaign(log: &EventLog, total_days: u32, electorates: &[&str]) -> String {
    let mut lines = Vec::new();
    lines.push("~~~CAMPAIGNING HAS STARTED~~~".to_string());

    for day in CampaignDay::countdown(total_days) {
        lines.push(String::new());
        lines.push(format!("----------===== {} =====----------", day));

        let todays: Vec<&CampaignEvent> = log.events_on_day(day.remaining).collect();
        for electorate in electorates {
            lines.push(format!("Daily report for {}:", electorate));
            let mut quiet = true;
            for event in todays.iter().filter(|e| e.electorate == *electorate) {
                quiet = false;
                for line in render_event(event) {
                    lines.push(format!("  {}", line));
                }
            }
            if quiet {
                lines.push(format!("  Nothing happened in {} today", electorate));
            }
        }
    }

    lines.push(String::new());
    lines.push("~~~CAMPAIGNING HAS FINISHED~~~".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use election_events::Contender;

    fn debate_event(day: u32, electorate: &str, winner: Option<Contender>) -> CampaignEvent {
        CampaignEvent {
            event_id: "evt_00000001".to_string(),
            day,
            electorate: electorate.to_string(),
            outcome: EventOutcome::Debate {
                contenders: [
                    Contender::new("Alice North", "Labor Party"),
                    Contender::new("Omar Reid", "Liberal Party"),
                ],
                winner,
            },
        }
    }

    #[test]
    fn test_won_debate_names_winner_and_party() {
        let event = debate_event(4, "Cook", Some(Contender::new("Omar Reid", "Liberal Party")));
        let text = render_event(&event).join("\n");
        assert!(text.contains("Alice North and Omar Reid have decided to hold a debate"));
        assert!(text.contains("Omar Reid has won the debate for the Liberal Party!"));
    }

    #[test]
    fn test_tied_debate_reports_no_winner() {
        let text = render_event(&debate_event(4, "Cook", None)).join("\n");
        assert!(text.contains("no clear winner"));
        assert!(!text.contains("has won"));
    }

    #[test]
    fn test_uncontained_scandal_blames_the_candidate() {
        let event = CampaignEvent {
            event_id: "evt_00000002".to_string(),
            day: 2,
            electorate: "Wentworth".to_string(),
            outcome: EventOutcome::Scandal {
                target: Contender::new("Dana Wells", "Foam Party"),
                contained: false,
            },
        };
        let text = render_event(&event).join("\n");
        assert!(text.contains("Oh no! Dana Wells has been involved in a scandal!"));
        assert!(text.contains("Wentworth is not happy"));
    }

    #[test]
    fn test_disclosure_mentions_the_issue() {
        let event = CampaignEvent {
            event_id: "evt_00000003".to_string(),
            day: 1,
            electorate: "Grayndler".to_string(),
            outcome: EventOutcome::IssueDisclosure {
                target: Contender::new("Alice North", "Labor Party"),
                issue: "Global Warming".to_string(),
                credible: true,
            },
        };
        let text = render_event(&event).join("\n");
        assert!(text.contains("Global Warming"));
        assert!(text.contains("more aligned with Alice North"));
    }

    #[test]
    fn test_campaign_rendering_covers_every_day_and_electorate() {
        let log = EventLog::null();
        let text = render_campaign(&log, 3, &["Grayndler", "Cook"]);
        assert!(text.starts_with("~~~CAMPAIGNING HAS STARTED~~~"));
        assert!(text.ends_with("~~~CAMPAIGNING HAS FINISHED~~~"));
        assert!(text.contains("3 days until the election"));
        assert!(text.contains("1 day until the election"));
        assert_eq!(text.matches("Daily report for Grayndler:").count(), 3);
        assert_eq!(text.matches("Nothing happened in Cook today").count(), 3);
    }

    #[test]
    fn test_events_land_under_their_electorate() {
        let mut log = EventLog::null();
        log.record(debate_event(2, "Cook", None)).unwrap();
        let text = render_campaign(&log, 2, &["Grayndler", "Cook"]);
        let cook_report = text
            .split("Daily report for Cook:")
            .nth(1)
            .expect("cook report present");
        assert!(cook_report.contains("decided to hold a debate"));
        assert!(text.contains("Nothing happened in Grayndler today"));
    }
}
