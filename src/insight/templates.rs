//! Built-in coaching templates.

use std::sync::OnceLock;

use crate::dimension::Dimension;

use super::{InsightBlock, InsightTable};

/// Three-tier narrative for each of the six dimensions.
pub fn dimension_table() -> &'static InsightTable<Dimension> {
    static TABLE: OnceLock<InsightTable<Dimension>> = OnceLock::new();
    TABLE.get_or_init(build_dimension_table)
}

/// Per-question notes for the questions that warrant them.
pub fn question_table() -> &'static InsightTable<String> {
    static TABLE: OnceLock<InsightTable<String>> = OnceLock::new();
    TABLE.get_or_init(build_question_table)
}

fn build_dimension_table() -> InsightTable<Dimension> {
    InsightTable::new()
        .with_tiers(
            Dimension::Positioning,
            InsightBlock::new(
                "The positioning story is solid: client journey and value promise land in one line and can carry premium sales.",
                "The ideal client profile is sharp, the promise is focused, and the differentiating story has become a repeatable pitch, ready to anchor flagship case studies.",
                &[
                    "Pick two or three high-value segments and package flagship case stories for each to build trust.",
                    "Extend the one-line promise into a visual slogan and a spoken short-video hook used consistently everywhere.",
                ],
                &[
                    "Sub-positioning per segment could raise conversion further",
                    "Revisit positioning as the market shifts to keep it fresh",
                ],
            ),
            InsightBlock::new(
                "The core audience is taking shape, but insight depth and differentiation are still blurry, which weakens content reach.",
                "You know who you want to serve, but concrete pain points and method language are missing, so stories move people less and premium conversations lack persuasion.",
                &[
                    "Interview three ideal clients, collect vivid pain-point phrases and update the persona card.",
                    "Map what sets you apart from peers and name a signature method you open every introduction with.",
                ],
                &[
                    "Journey stages and key pain scenarios still need filling in",
                    "Settle a one-line positioning plus a visual anchor",
                ],
            ),
            InsightBlock::new(
                "Positioning is not yet distinct: ideal client, value promise and deliverables all need redefining.",
                "The description is generic, so prospects cannot tell whether you solve their problem; premium sales have no value anchor and the trust flywheel cannot start.",
                &[
                    "Walk the client journey (discover, trust, buy, return) and list each stage's questions to back into a positioning structure.",
                    "Practise the one-line value proposition: who you serve + core problem + method + key result.",
                ],
                &[
                    "Finish a positioning canvas before spending on promotion",
                    "Validate the story with a small group before going public",
                ],
            ),
        )
        .with_tiers(
            Dimension::Product,
            InsightBlock::new(
                "The product line is mature and delivery runs smoothly, enough to carry premium deals.",
                "Pricing, benefits and delivery experience of the flagship follow one logic, supporting cases and toolkits are ample, and repeat and referral paths are clear.",
                &[
                    "Design upgrade benefits (custom rituals, review workshops) around the best client journey to keep lifting ticket size.",
                    "Turn the delivery SOP into a visual healing path or toolkit that makes sales walkthroughs more convincing.",
                ],
                &[
                    "Watch delivery capacity and workload so experience stays consistent",
                    "Track delivery satisfaction to drive ongoing improvement",
                ],
            ),
            InsightBlock::new(
                "The product base is sound but highlights are weak; case assets and delivery experience need polish.",
                "A flagship and a process exist, but differentiators, experience design and proof material are thin, so sales struggle to justify a premium.",
                &[
                    "Fill in scripts, forms and feedback templates for each delivery milestone to reduce variance.",
                    "Systematically collect cases and testimonials into a results book for sales and short video.",
                ],
                &[
                    "Make delivery visible so clients see both process and outcome",
                    "Refresh case material regularly to keep it persuasive",
                ],
            ),
            InsightBlock::new(
                "Products are scattered and the method lacks a visual form, which makes premium conversations hard.",
                "There is no standard delivery path or method model, so clients cannot grasp the value and sales has no chain of evidence; ticket size stays capped.",
                &[
                    "Lay out the flagship arc (assessment, sessions, accompaniment, review) with a deliverable for each step.",
                    "Distil a signature model (three stages, four quadrants) with one visual and one explanation script.",
                ],
                &[
                    "Write the product guide and delivery handbook before widening sales channels",
                    "Co-create cases with typical clients to build trust",
                ],
            ),
        )
        .with_tiers(
            Dimension::Content,
            InsightBlock::new(
                "The content spine is clear; a story library and teaching logic sustain a steady rhythm.",
                "Brand story, cases and knowledge points are managed as structured assets reused across platforms, building one voice and strong recall.",
                &[
                    "Break high-engagement pieces into fixed columns (case breakdowns, healing moments, behind the scenes).",
                    "Build a content asset library with numbered slogans, quotes and case screenshots for cross-platform reuse.",
                ],
                &[
                    "Try co-creating with other creators to extend reach",
                    "Review content performance regularly to avoid topic fatigue",
                ],
            ),
            InsightBlock::new(
                "Content pillars exist, but story depth and cadence planning are still unstable.",
                "Topics have a direction but no script templates or asset management, so publishing depends on inspiration and the professional tone wavers.",
                &[
                    "Write a must-tell story list for each of the three content pillars to keep output consistent.",
                    "Set a monthly theme and plan scripts and assets before shooting.",
                ],
                &[
                    "Set up an asset pool and script templates to cut last-minute creation",
                    "Use a content calendar with a clear weekly quota",
                ],
            ),
            InsightBlock::new(
                "The narrative is fragmented, with no continuing stories or expert viewpoint to make it memorable.",
                "Most posts are improvised, with no coordination of brand story, education and client results, so nothing accumulates or feeds sales.",
                &[
                    "Write your origin story (why I became a healer) and split it into short pieces woven through posts.",
                    "Design an educational series (healing myths, three-step self-check) that shows what you solve.",
                ],
                &[
                    "Advance brand story, education series and client cases in parallel",
                    "Start with script templates so every piece carries a call to action",
                ],
            ),
        )
        .with_tiers(
            Dimension::ShortVideo,
            InsightBlock::new(
                "Short-video operations are mature; account setup and data iteration follow a method.",
                "Account positioning, visual system and data reviews form a loop, scripts share a structure, and output consistently matches a premium image.",
                &[
                    "Layer more ritual shots and before/after material onto the existing script template to lift the premium feel.",
                    "Hold a weekly data review that dissects hits by opening line, shot and hook, and record findings in a playbook.",
                ],
                &[
                    "Consider extra accounts or live streams to widen reach",
                    "Mind footage rights and account security; keep backups",
                ],
            ),
            InsightBlock::new(
                "Publishing cadence is under control, but script method and data reviews are not yet a closed loop.",
                "Output is steady, but with no shared hook phrasing, shot structure or data log, results rely on instinct and are hard to repeat.",
                &[
                    "Standardise the first three seconds with a hook such as \"If you are currently...\" to lift retention.",
                    "Keep a simple A/B sheet and run one weekly experiment on topic, cover or call to action.",
                ],
                &[
                    "Keep a video log of topics and metrics",
                    "Bring in editing or scripting help to reduce personal load",
                ],
            ),
            InsightBlock::new(
                "Short-video assets are thin; account positioning, topics and cadence must be built from scratch.",
                "Visuals, bio and scripts are not unified, publishing is irregular and each video's purpose is unclear, so little client acquisition happens.",
                &[
                    "Decide the account persona and visual tone (teacher or companion) and finish avatar and bio in one go.",
                    "Draft a 30-day content calendar stating each video's purpose: educate, build trust or convert.",
                ],
                &[
                    "Run an account check-up to unify visuals and calls to action first",
                    "Start from templated scripts to validate topics quickly",
                ],
            ),
        )
        .with_tiers(
            Dimension::Sales,
            InsightBlock::new(
                "The sales loop is smooth, with standard moves and materials from lead to close.",
                "Lead handling, private-channel nurturing, consultation scripts and closing materials work together, and repeat purchases and referrals compound growth.",
                &[
                    "Introduce automation (form bots, CRM) to log lead behaviour and follow up by segment.",
                    "Build discovery check-ins into delivery that lead naturally to upgrades or referrals.",
                ],
                &[
                    "Strengthen client-success metrics and close the NPS loop",
                    "Ready to build a multi-role sales team that replicates the playbook",
                ],
            ),
            InsightBlock::new(
                "Basic lead capture and private-channel follow-up exist, but scripts, materials and follow-up rhythm are inconsistent.",
                "Leads are coming in, but without standard scripts, closing kits and cadence management, closing efficiency depends on personal experience.",
                &[
                    "Write three core scripts: welcome message, needs interview outline, quote and objection replies.",
                    "Assemble a standard closing kit (case book, process chart, price sheet) for a more professional pitch.",
                ],
                &[
                    "Tag leads and set reminders so none slip through",
                    "Define hard rules such as a 72-hour follow-up rhythm",
                ],
            ),
            InsightBlock::new(
                "The sales path has many breaks; lead capture, private-channel work and closing scripts all need a plan.",
                "There is no clear path from content to sale, many leads are lost before joining a private channel, and there are no reusable diagnostic scripts or objection handling.",
                &[
                    "Build at least one reliable lead-capture path (short-link form or work chat) so leads are not lost.",
                    "Design a three-touch follow-up (introduction, diagnosis, proposal) with scripts and questionnaires prepared.",
                ],
                &[
                    "First add a landing page, welcome script and closing checklist",
                    "Focus on a single channel in the short term to raise the hit rate",
                ],
            ),
        )
        .with_tiers(
            Dimension::Operations,
            InsightBlock::new(
                "Resources and rhythm are in place; attention can move to refinement and team learning.",
                "Roles are clear, budget is controlled, and dashboards and reviews are mature enough to support scaling and knowledge capture.",
                &[
                    "Feed key metrics (acquisition cost, ticket size, completion rate) into one dashboard with alert thresholds.",
                    "Fix a monthly business review covering goal progress, team capability and next experiments.",
                ],
                &[
                    "Invest in an internal knowledge base and training",
                    "Bring in outside advisors or benchmark cases to keep iterating",
                ],
            ),
            InsightBlock::new(
                "Basic staffing and budget exist, but goal breakdown, data tracking and reviews are weak.",
                "There is an initial team and budget but no quantified goals or records, so problems surface late and strategies go unverified.",
                &[
                    "Break quarterly goals into monthly and weekly metrics with owners tracking progress on a task wall.",
                    "Start a minimal dashboard (a spreadsheet is fine) for traffic, leads, sales and repeat purchases.",
                ],
                &[
                    "Use a fixed review agenda: data, problems, decisions",
                    "Set aside an experiment budget and track return on spend",
                ],
            ),
            InsightBlock::new(
                "Operational foundations are missing; team coordination, budget and data habits all need groundwork.",
                "Owners, processes and budget are undefined, execution depends on ad hoc personal decisions, and nothing is reviewed or able to sustain growth.",
                &[
                    "Define each role (content, operations, sales) and write down output standards, even for part-timers.",
                    "Set a minimum operating and learning budget and hold a weekly review of key issues.",
                ],
                &[
                    "Set up a basic data sheet and a weekly meeting first",
                    "Reserve budget for learning and outside help to close gaps faster",
                ],
            ),
        )
}

fn build_question_table() -> InsightTable<String> {
    InsightTable::new()
        .with_tiers(
            "q4".to_string(),
            InsightBlock::new(
                "Ticket size already supports a premium business.",
                "Protect the price with visible delivery value rather than discounts.",
                &["Add an upgrade tier above the flagship for the best-fit clients."],
                &[],
            ),
            InsightBlock::new(
                "Ticket size is mid-range with headroom.",
                "Bundling assessment, sessions and follow-up into one package usually lifts the perceived value.",
                &["Test a packaged offer at the next price band with three prospects."],
                &[],
            ),
            InsightBlock::new(
                "Ticket size is too low to fund growth.",
                "Low prices force high volume, which the current lead flow cannot sustain.",
                &["Design one flagship offer priced at least one band higher."],
                &["Discount-driven sales erode positioning"],
            ),
        )
        .with_tiers(
            "q8".to_string(),
            InsightBlock::new(
                "Lead capture runs on several paths.",
                "Keep each path tagged so lead sources stay comparable.",
                &["Compare conversion per path monthly and prune the weakest."],
                &[],
            ),
            InsightBlock::new(
                "Lead capture relies on one or two paths.",
                "A second reliable path reduces dependence on a single platform.",
                &["Add a short-link form as a backup path."],
                &[],
            ),
            InsightBlock::new(
                "There is no clear lead capture path.",
                "Attention generated by content leaks away without a defined next step.",
                &["Put one call to action and one form behind every post."],
                &["Most interested viewers never become reachable leads"],
            ),
        )
        .with_tiers(
            "q9".to_string(),
            InsightBlock::new(
                "Private-channel conversion is strong.",
                "The closing process is worth documenting for others to reuse.",
                &["Record the consultation script as a team playbook."],
                &[],
            ),
            InsightBlock::new(
                "Conversion is workable but uneven.",
                "Structured follow-up typically moves this band up fastest.",
                &["Adopt a fixed follow-up rhythm after each consultation."],
                &[],
            ),
            InsightBlock::new(
                "Few private-channel contacts convert.",
                "Leads reach the channel but there is no diagnostic conversation to qualify them.",
                &["Introduce a short diagnostic questionnaire before quoting."],
                &["Leads go cold within days of joining"],
            ),
        )
}
