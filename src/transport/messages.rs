use crate::domain::{
    ApiKey, DEFAULT_LIST_LIMIT, DEFAULT_LIST_PAGE, MessageListOptions, Recipients, SendMessage,
    SenderName,
};

pub fn encode_send_message_form(
    api_key: &ApiKey,
    default_sender_name: &SenderName,
    request: &SendMessage,
) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();
    params.push((ApiKey::FIELD.to_owned(), api_key.as_str().to_owned()));
    params.push(("message".to_owned(), request.message().to_owned()));
    push_recipients(&mut params, request.recipients());
    params.push((
        SenderName::FIELD.to_owned(),
        default_sender_name.as_str().to_owned(),
    ));

    if let Some(sender_name) = request.sender_name_override() {
        for (key, value) in params.iter_mut() {
            if key == SenderName::FIELD {
                *value = sender_name.as_str().to_owned();
            }
        }
    }

    params
}

fn push_recipients(params: &mut Vec<(String, String)>, recipients: &Recipients) {
    match recipients {
        Recipients::Single(value) => {
            params.push((Recipients::FIELD.to_owned(), value.clone()));
        }
        Recipients::Many(values) => {
            for (idx, value) in values.iter().enumerate() {
                params.push((format!("{}[{idx}]", Recipients::FIELD), value.clone()));
            }
        }
    }
}

pub fn encode_message_query(api_key: &ApiKey) -> Vec<(String, String)> {
    vec![(ApiKey::FIELD.to_owned(), api_key.as_str().to_owned())]
}

pub fn encode_list_messages_query(
    api_key: &ApiKey,
    options: &MessageListOptions,
) -> Vec<(String, String)> {
    let mut params = encode_message_query(api_key);
    params.push((
        "limit".to_owned(),
        options.limit.unwrap_or(DEFAULT_LIST_LIMIT).to_string(),
    ));
    params.push((
        "page".to_owned(),
        options.page.unwrap_or(DEFAULT_LIST_PAGE).to_string(),
    ));

    let optional = [
        ("startDate", &options.start_date),
        ("endDate", &options.end_date),
        ("status", &options.status),
        ("network", &options.network),
        (SenderName::FIELD, &options.sender_name),
    ];
    params.extend(
        optional
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key.to_owned(), v.clone()))),
    );

    params
}
