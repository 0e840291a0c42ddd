mod dynamic_input;
