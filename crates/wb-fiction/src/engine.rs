//! The traversal engine: drives one playthrough from the start node to an
//! ending or a quit.

use std::io::Write;

use tracing::{debug, info, warn};
use wb_core::{QUIT_KEY, StoryGraph, StoryNode};

use crate::config::{PlayConfig, VisualizationPolicy};
use crate::error::{FictionError, FictionResult};
use crate::input::{ChoiceSource, normalize_token};
use crate::session::{SessionState, Transition};
use crate::visualize::Visualizer;

/// Plays a story graph against a choice source, writing narration to an
/// output channel.
pub struct StoryEngine<'g, V> {
    graph: &'g StoryGraph,
    config: PlayConfig,
    visualizer: V,
}

impl<'g, V: Visualizer> StoryEngine<'g, V> {
    /// Create an engine over `graph`.
    pub fn new(graph: &'g StoryGraph, config: PlayConfig, visualizer: V) -> Self {
        Self {
            graph,
            config,
            visualizer,
        }
    }

    /// Play one session to completion.
    ///
    /// Returns the finished session: either terminated at an ending or quit.
    /// Invalid interactive tokens are re-prompted; invalid or missing scripted
    /// tokens are errors.
    pub fn play<S, W>(&mut self, source: &mut S, out: &mut W) -> FictionResult<SessionState>
    where
        S: ChoiceSource + ?Sized,
        W: Write,
    {
        let graph = self.graph;
        let mut session = SessionState::new(graph.start());

        loop {
            let id = session.current().to_string();
            let node = graph.require(&id)?;

            writeln!(out, "\n== {} ==\n{}\n", node.title, node.text)?;

            if node.is_terminal() {
                writeln!(
                    out,
                    "The adventure ends here. Thanks for guiding {}!\n",
                    graph.meta.protagonist
                )?;
                session.terminate();
                info!(node = %id, steps = session.taken().len(), "reached an ending");
                break;
            }

            if graph.meta.map_checkpoint.as_deref() == Some(id.as_str())
                && session.mark_map_announced()
            {
                self.announce_map(out)?;
            }

            self.list_choices(node, source.is_interactive(), out)?;

            let Some(raw) = source.next_token(&id)? else {
                writeln!(out)?;
                self.write_farewell(out)?;
                session.abandon();
                info!(node = %id, "input closed, leaving the story");
                break;
            };

            if !source.is_interactive() {
                writeln!(out, "[auto-choice] {}", normalize_token(&raw))?;
            }

            match session.apply(node, &raw) {
                Transition::Advanced { to } => {
                    debug!(from = %id, to = %to, "choice accepted");
                }
                Transition::Quit => {
                    self.write_farewell(out)?;
                    info!(node = %id, steps = session.taken().len(), "player quit");
                    break;
                }
                Transition::Invalid if source.is_interactive() => {
                    debug!(node = %id, token = %raw, "invalid choice");
                    writeln!(out, "Invalid choice. Please try again.")?;
                }
                Transition::Invalid => {
                    return Err(FictionError::ScriptedInvalidChoice {
                        node: id,
                        token: raw,
                    });
                }
            }
        }

        if session.wants_summary() && self.summary_requested(&session, source, out)? {
            let rendered = self.visualizer.render_summary(session.taken(), out);
            debug!(rendered, "route summary attempted");
        }

        out.flush()?;
        Ok(session)
    }

    fn list_choices<W: Write>(
        &self,
        node: &StoryNode,
        interactive: bool,
        out: &mut W,
    ) -> FictionResult<()> {
        for choice in &node.choices {
            writeln!(out, "  {}. {}", choice.key, choice.description)?;
        }
        writeln!(out, "  {QUIT_KEY}. Quit the adventure")?;

        if interactive {
            write!(out, "Your choice: ")?;
            out.flush()?;
        }
        Ok(())
    }

    fn announce_map<W: Write>(&mut self, out: &mut W) -> FictionResult<()> {
        let protagonist = &self.graph.meta.protagonist;
        match self.visualizer.announce_map() {
            Ok(Some(path)) => writeln!(
                out,
                "A simple map of {protagonist}'s journey was generated at: {}\n",
                path.display()
            )?,
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "journey map could not be written");
                writeln!(out, "Unable to generate the journey map: {e}\n")?;
            }
        }
        Ok(())
    }

    fn write_farewell<W: Write>(&self, out: &mut W) -> FictionResult<()> {
        writeln!(out, "You chose to quit. Safe travels, wherever they lead.\n")?;
        Ok(())
    }

    /// Decide, per the visualization policy, whether to render the summary.
    fn summary_requested<S, W>(
        &self,
        session: &SessionState,
        source: &mut S,
        out: &mut W,
    ) -> FictionResult<bool>
    where
        S: ChoiceSource + ?Sized,
        W: Write,
    {
        match self.config.visualization {
            VisualizationPolicy::Always => Ok(true),
            VisualizationPolicy::Never => Ok(false),
            VisualizationPolicy::Ask if !source.is_interactive() => Ok(false),
            VisualizationPolicy::Ask => {
                write!(
                    out,
                    "Would you like to open a route view of {}'s journey? (Y/N): ",
                    self.graph.meta.protagonist
                )?;
                out.flush()?;
                let answer = source.next_token(session.current())?;
                writeln!(out)?;
                Ok(answer.is_some_and(|a| normalize_token(&a) == "Y"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor};
    use std::path::PathBuf;

    use proptest::prelude::*;
    use wb_core::RouteStep;
    use wb_core::journey::{DEMO_SCRIPT, journey_west};

    use super::*;
    use crate::input::{InteractiveInput, ScriptedChoices};
    use crate::session::Ending;
    use crate::visualize::NoVisualizer;

    /// Records every call the engine makes.
    #[derive(Default)]
    struct Recorder {
        announced: usize,
        rendered: Vec<Vec<RouteStep>>,
    }

    impl Visualizer for Recorder {
        fn announce_map(&mut self) -> io::Result<Option<PathBuf>> {
            self.announced += 1;
            Ok(Some(PathBuf::from("journey_map.txt")))
        }

        fn render_summary(&mut self, route: &[RouteStep], out: &mut dyn Write) -> bool {
            self.rendered.push(route.to_vec());
            writeln!(out, "[route rendered]").is_ok()
        }
    }

    struct BrokenMap;

    impl Visualizer for BrokenMap {
        fn announce_map(&mut self) -> io::Result<Option<PathBuf>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }

        fn render_summary(&mut self, _route: &[RouteStep], _out: &mut dyn Write) -> bool {
            false
        }
    }

    fn play_with<S: ChoiceSource>(
        policy: VisualizationPolicy,
        mut source: S,
    ) -> (FictionResult<SessionState>, Recorder, String) {
        let graph = journey_west().unwrap();
        let mut recorder = Recorder::default();
        let mut out = Vec::new();
        let result = {
            let config = PlayConfig::new().with_visualization(policy);
            let mut engine = StoryEngine::new(&graph, config, &mut recorder);
            engine.play(&mut source, &mut out)
        };
        (result, recorder, String::from_utf8(out).unwrap())
    }

    #[test]
    fn demo_script_reaches_rooftop_ending() {
        let (result, recorder, output) = play_with(
            VisualizationPolicy::Never,
            ScriptedChoices::new(DEMO_SCRIPT),
        );
        let session = result.unwrap();

        assert!(session.is_terminated());
        assert_eq!(session.current(), "ending_rooftop");
        assert_eq!(session.taken().len(), 8);
        assert_eq!(
            session.taken()[2],
            RouteStep::new(
                "Packing the Car",
                "Minimalist: only essentials and a lucky MSU pennant"
            )
        );
        assert_eq!(recorder.announced, 1);
        assert!(recorder.rendered.is_empty());
        assert!(output.contains("== Rooftop Resolve =="));
        assert!(output.contains("[auto-choice] 2"));
        assert!(output.contains("Thanks for guiding Eli!"));
        assert!(output.contains("generated at: journey_map.txt"));
    }

    #[test]
    fn ending_renders_exactly_once_when_requested() {
        let (result, recorder, output) = play_with(
            VisualizationPolicy::Always,
            ScriptedChoices::new(DEMO_SCRIPT),
        );
        let session = result.unwrap();

        assert_eq!(recorder.rendered.len(), 1);
        assert_eq!(recorder.rendered[0], session.taken());
        assert_eq!(output.matches("[route rendered]").count(), 1);
    }

    #[test]
    fn quit_at_first_decision() {
        let (result, recorder, output) =
            play_with(VisualizationPolicy::Always, ScriptedChoices::new(["q"]));
        let session = result.unwrap();

        assert!(!session.is_terminated());
        assert!(session.taken().is_empty());
        assert_eq!(session.ending(), Some(Ending::Quit));
        assert!(recorder.rendered.is_empty());
        assert_eq!(recorder.announced, 0);
        assert!(output.contains("You chose to quit."));
    }

    #[test]
    fn quit_after_choices_never_renders() {
        let (result, recorder, _) = play_with(
            VisualizationPolicy::Always,
            ScriptedChoices::new(["1", "2", "Q"]),
        );
        let session = result.unwrap();

        assert_eq!(session.taken().len(), 2);
        assert!(session.has_quit());
        assert!(recorder.rendered.is_empty());
    }

    #[test]
    fn invalid_interactive_choice_represents_node() {
        let input = InteractiveInput::new(Cursor::new("9\n2\nn\n"));
        let (result, recorder, output) = play_with(VisualizationPolicy::Ask, input);
        let session = result.unwrap();

        assert_eq!(output.matches("== The Offer Letter ==").count(), 2);
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 1);
        assert_eq!(session.current(), "stay_home");
        assert_eq!(session.taken().len(), 1);
        assert!(output.contains("Would you like to open a route view"));
        assert!(recorder.rendered.is_empty());
    }

    #[test]
    fn interactive_yes_renders_summary() {
        let input = InteractiveInput::new(Cursor::new("2\ny\n"));
        let (result, recorder, _) = play_with(VisualizationPolicy::Ask, input);

        assert!(result.unwrap().is_terminated());
        assert_eq!(
            recorder.rendered,
            vec![vec![RouteStep::new(
                "The Offer Letter",
                "Stay in Michigan and postpone the move"
            )]]
        );
    }

    #[test]
    fn scripted_source_is_never_asked() {
        let (result, recorder, output) =
            play_with(VisualizationPolicy::Ask, ScriptedChoices::new(["2"]));

        assert!(result.unwrap().is_terminated());
        assert!(recorder.rendered.is_empty());
        assert!(!output.contains("Would you like"));
    }

    #[test]
    fn end_of_input_quits() {
        let input = InteractiveInput::new(Cursor::new(""));
        let (result, recorder, output) = play_with(VisualizationPolicy::Always, input);
        let session = result.unwrap();

        assert!(session.has_quit());
        assert!(!session.is_terminated());
        assert!(recorder.rendered.is_empty());
        assert!(output.contains("Your choice: "));
    }

    #[test]
    fn map_announced_once_per_playthrough() {
        let input = InteractiveInput::new(Cursor::new("1\nx\nz\nq\n"));
        let (result, recorder, output) = play_with(VisualizationPolicy::Never, input);

        assert!(result.unwrap().has_quit());
        assert_eq!(recorder.announced, 1);
        assert_eq!(output.matches("== Planning the Move ==").count(), 3);
        assert_eq!(output.matches("generated at").count(), 1);
    }

    #[test]
    fn scripted_invalid_choice_is_an_error() {
        let (result, _, _) =
            play_with(VisualizationPolicy::Never, ScriptedChoices::new(["1", "7"]));

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            FictionError::ScriptedInvalidChoice { ref node, ref token }
                if node == "travel_method" && token == "7"
        ));
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let (result, _, _) = play_with(VisualizationPolicy::Never, ScriptedChoices::new(["1"]));

        let err = result.unwrap_err();
        assert!(matches!(err, FictionError::ScriptExhausted { node } if node == "travel_method"));
    }

    #[test]
    fn map_failure_is_reported_not_fatal() {
        let graph = journey_west().unwrap();
        let mut engine = StoryEngine::new(&graph, PlayConfig::new(), BrokenMap);
        let mut script = ScriptedChoices::new(DEMO_SCRIPT);
        let mut out = Vec::new();

        let session = engine.play(&mut script, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(session.is_terminated());
        assert!(output.contains("Unable to generate the journey map: read-only"));
    }

    #[test]
    fn story_keys_are_never_read_as_quit() {
        let graph = journey_west().unwrap();
        let mut engine = StoryEngine::new(&graph, PlayConfig::new(), NoVisualizer);
        let mut script = ScriptedChoices::new(["1", "q"]);
        let mut out = Vec::new();

        let session = engine.play(&mut script, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(
            session.taken(),
            &[RouteStep::new("The Offer Letter", "Accept the job offer")]
        );
        assert_eq!(session.current(), "travel_method");
        assert!(session.has_quit());
        assert_eq!(output.matches("  Q. Quit the adventure").count(), 2);
        assert_eq!(output.matches("\n  1. ").count(), 2);
        assert!(!output.contains("generated at"));
    }

    #[test]
    fn missing_node_surfaces_as_story_error() {
        let graph = journey_west().unwrap();
        let err = FictionError::from(graph.require("nowhere").unwrap_err());
        assert!(matches!(
            err,
            FictionError::Story(wb_core::StoryError::UnknownNode(ref id)) if id == "nowhere"
        ));
    }

    proptest! {
        #[test]
        fn unknown_tokens_never_advance(token in "[3-9A-PR-Z]") {
            let graph = journey_west().unwrap();
            let offer = graph.require(graph.start()).unwrap();
            let mut session = SessionState::new(graph.start());

            prop_assert_eq!(session.apply(offer, &token), Transition::Invalid);
            prop_assert_eq!(session.current(), "offer");
            prop_assert!(session.taken().is_empty());
            prop_assert!(!session.has_quit());
        }
    }
}
