//! Prompt templates for resume-grounded answer generation.
//!
//! Placeholders are substituted by plain string replacement; every
//! template instructs the model to return the bare value only.

pub const TEXT_FIELD_PROMPT: &str = "\
Following the resume below, return the answer for the following question: {field_label}

Resume:
{resume_content}

Give a positive answer, as I want to get an interview for this job.
Make the answer as short as possible.
If it is a yes / no question, return only yes or no.
If it is a how many question or any other request for a numeric response, return only the number.
If it is a phone number question, return only digits.
If it is a simple personal detail like first name, last name, email, address, linkedin or github, return only the relevant value from the resume, without any additional words or characters.
For any other question, be specific and return only the necessary details.
Answer as if you are filling the job application form yourself, with the exact value to be filled.
When you cannot find the answer in the resume, return \"Not available\".
Do not explain when the answer is not found in the resume, just return \"Not available\".
Do not include the field label in your response.";

pub const SELECT_FIELD_PROMPT: &str = "\
Following the resume below, select the right option from: {options}

Resume:
{resume_content}

Be positive, as I want to get an interview for this job.
Return only the text of the selected option and nothing else.";

pub const RADIO_FIELD_PROMPT: &str = "\
Following the resume below, choose the right option from: {options}

Resume:
{resume_content}

Be positive, as I want to get an interview for this job.
Return only the text of the selected option and nothing else.";

pub fn text_prompt(field_label: &str, resume_content: &str) -> String {
    TEXT_FIELD_PROMPT
        .replace("{field_label}", field_label)
        .replace("{resume_content}", resume_content)
}

pub fn select_prompt(options: &[String], resume_content: &str) -> String {
    SELECT_FIELD_PROMPT
        .replace("{options}", &format!("{:?}", options))
        .replace("{resume_content}", resume_content)
}

pub fn radio_prompt(options: &[String], resume_content: &str) -> String {
    RADIO_FIELD_PROMPT
        .replace("{options}", &format!("{:?}", options))
        .replace("{resume_content}", resume_content)
}
