//! Built-in prompt templates.
//!
//! Each template has a `{{ framework }}` slot and a `{{ topic }}` slot.

/// Character typing for a fictional universe.
pub const CHARACTERS_TEMPLATE: &str = r#"
Your job is to help provide a human writer with key bullet points that capture personality types in the {{ framework }} personality framework for all of the major characters from a given TV show/movie/book/etc based on your knowledge of each type.

AGAIN, THE SELECTED FRAMEWORK IS: {{ framework }}

(IF AND ONLY IF the selected framework is Myers-Briggs and you plan to label or name any of the types, please use the following names only. Note you don't have to do this, but if you do use the names in addition to the types, use these names: INFP: The Healer, INTJ: The Mastermind, INFJ: The Counselor, INTP: The Architect, ENFP: The Champion, ENTJ: The Commander, ENTP: The Visionary, ENFJ: The Teacher, ISFJ: The Protector, ISFP: The Composer, ISTJ: The Inspector, ISTP: The Craftsperson, ESFJ: The Provider, ESFP: The Performer, ESTJ: The Supervisor, ESTP: The Dynamo)

Here is the specific character universe for which you should generate the appropriate personality types: {{ topic }}

Your job is to output ALL of the key characters related to the above universe and their type assignment as headers, and the rich justification for and evidence related to assigning that character to that type as bullets below that header.
SPECIAL NOTE: if the SELECTED FRAMEWORK is Big Five, you cannot do typing in the same way as the other models. Therefore, still output the major characters and attempt to characterize them across all five traits (very low, low, medium, high, very high), using rich evidence for each one.

It should be as rich information as possible/appropriate for each character, using specific details or actions from the story to justify your type/trait assignment. It is okay to have duplicate types (give the best and most honest type assignment possible), but be mindful at the same time not to output, eg, 10 characters of the same type (this wouldn't make for a great article!). Strike the balance, but prioritize accurately nailing the types.

Again, a human is going to take your outputs as an outline/reference for writing a polished blog piece, so you don't need to output polished text yourself, just make sure the core ideas and key raw content is there. It does not have to be pretty!

Formatting requirements: make sure you immediately output the specified content, no preface or conclusion, and make sure it is in Markdown for easy formatting.

YOUR OUTPUTS:
"#;

/// How each type in a framework approaches a topic.
pub const INSIGHTS_TEMPLATE: &str = r#"
Your job is to help provide a human writer with key bullet points describing how each type in the {{ framework }} personality framework relates to a given topic, based on your knowledge of each type.

AGAIN, THE SELECTED FRAMEWORK IS: {{ framework }}

(IF AND ONLY IF the selected framework is Myers-Briggs and you plan to label or name any of the types, please use the following names only: INFP: The Healer, INTJ: The Mastermind, INFJ: The Counselor, INTP: The Architect, ENFP: The Champion, ENTJ: The Commander, ENTP: The Visionary, ENFJ: The Teacher, ISFJ: The Protector, ISFP: The Composer, ISTJ: The Inspector, ISTP: The Craftsperson, ESFJ: The Provider, ESFP: The Performer, ESTJ: The Supervisor, ESTP: The Dynamo)

Here is the topic you should cover for every type: {{ topic }}

Output EVERY type in the framework as a header, with concrete, specific bullets below it explaining how that type tends to think, feel and act with respect to the topic above.
SPECIAL NOTE: if the SELECTED FRAMEWORK is Big Five, there are no types. Instead, use each of the five traits as a header and describe how people who are high and low in that trait relate to the topic.

A human is going to take your outputs as an outline/reference for writing a polished blog piece, so you don't need to output polished text yourself, just make sure the core ideas and key raw content is there.

Formatting requirements: make sure you immediately output the specified content, no preface or conclusion, and make sure it is in Markdown for easy formatting.

YOUR OUTPUTS:
"#;
